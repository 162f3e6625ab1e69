use std::{fs, thread::sleep, time::Duration};

use serial_test::serial;
use tempfile::tempdir;

#[test]
#[serial]
fn bare_file_name_logs_into_working_directory() {
    let dir = tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    draw_together::logging::init(false, Some("draw.log".into()));
    tracing::info!("canvas cleared");

    sleep(Duration::from_millis(100));

    let path = dir.path().join("draw.log");
    assert!(path.exists(), "log file was not created in the working directory");
    assert!(fs::read_to_string(path).unwrap().contains("canvas cleared"));
}
