use tauri::Manager;

mod config;
mod process;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // The singleton result file lives in the app data directory
            let app_data_dir = app.path().app_data_dir().expect("Failed to get app data dir");
            std::fs::create_dir_all(&app_data_dir).expect("Failed to create app data dir");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            process::commands::process_video,
            process::commands::get_last_result,
            process::commands::is_processing,
            process::commands::reveal_result
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
