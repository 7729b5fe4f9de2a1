use crate::launch::types::{LaunchFlags, LaunchRecord};
use crate::util::is_debugger_present;

use log::{error, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Device services the remote-share launch depends on
pub trait ConsoleServices {
    /// Fetch the launch record left by a previous instance. Fetching empties the store.
    fn take_launch_record(&mut self) -> Option<LaunchRecord>;

    /// Put a fetched record back for the application to read.
    fn restore_launch_record(&mut self, record: &LaunchRecord) -> Result<(), Box<dyn Error>>;

    /// The command line the system started this process with.
    fn system_command_line(&self) -> String;

    fn console_name(&self) -> Result<String, String>;

    fn debugger_present(&self) -> bool;

    fn request_cold_reboot(&mut self);
}

#[derive(Serialize, Deserialize)]
struct StoredRecord {
    launch_id: u32,
    flags: u32,
    payload: Vec<u8>,
}

/// Host implementation: the launch record lives in a JSON file that a fetch deletes.
pub struct HostConsole {
    record_path: PathBuf,
    argv: Vec<String>,
}

impl HostConsole {
    pub fn new(record_path: PathBuf, argv: Vec<String>) -> Self {
        HostConsole { record_path, argv }
    }
}

impl ConsoleServices for HostConsole {
    fn take_launch_record(&mut self) -> Option<LaunchRecord> {
        let data = fs::read(&self.record_path).ok()?;
        if let Err(e) = fs::remove_file(&self.record_path) {
            warn!("Could not clear launch record {}: {}", self.record_path.display(), e);
        }

        match serde_json::from_slice::<StoredRecord>(&data) {
            Ok(stored) => Some(LaunchRecord {
                launch_id: stored.launch_id,
                flags: LaunchFlags::from_bits_retain(stored.flags),
                payload: stored.payload,
            }),
            Err(e) => {
                warn!("Ignoring unreadable launch record: {}", e);
                None
            }
        }
    }

    fn restore_launch_record(&mut self, record: &LaunchRecord) -> Result<(), Box<dyn Error>> {
        let stored = StoredRecord {
            launch_id: record.launch_id,
            flags: record.flags.bits(),
            payload: record.payload.clone(),
        };
        let file = fs::File::create(&self.record_path)?;
        serde_json::to_writer(file, &stored)?;
        Ok(())
    }

    fn system_command_line(&self) -> String {
        let mut cmdline = match self.argv.first() {
            Some(program) => format!("\"{}\"", program),
            None => String::new(),
        };
        for arg in self.argv.iter().skip(1) {
            cmdline.push(' ');
            cmdline.push_str(arg);
        }
        cmdline
    }

    fn console_name(&self) -> Result<String, String> {
        host_name()
    }

    fn debugger_present(&self) -> bool {
        is_debugger_present()
    }

    fn request_cold_reboot(&mut self) {
        error!("Cold reboot requested; the host build cannot restart the device");
    }
}

#[cfg(unix)]
fn host_name() -> Result<String, String> {
    let mut buf = [0u8; 256];
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
    if rc != 0 {
        return Err(std::io::Error::last_os_error().to_string());
    }
    let end = buf.iter().position(|b| *b == 0).unwrap_or(buf.len());
    Ok(String::from_utf8_lossy(&buf[..end]).to_string())
}

#[cfg(not(unix))]
fn host_name() -> Result<String, String> {
    std::env::var("COMPUTERNAME").map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetching_a_record_empties_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launch.json");
        let mut console = HostConsole::new(path.clone(), vec![]);

        let record = LaunchRecord {
            launch_id: 7,
            flags: LaunchFlags::INVITE_RESTART,
            payload: b"default.xex -game tf\0".to_vec(),
        };
        console.restore_launch_record(&record).unwrap();

        assert_eq!(console.take_launch_record(), Some(record));
        assert!(!path.exists());
        assert_eq!(console.take_launch_record(), None);
    }

    #[test]
    fn unreadable_record_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launch.json");
        std::fs::write(&path, "not json").unwrap();
        let mut console = HostConsole::new(path.clone(), vec![]);

        assert_eq!(console.take_launch_record(), None);
        assert!(!path.exists());
    }

    #[test]
    fn system_command_line_quotes_program() {
        let console = HostConsole::new(
            PathBuf::from("unused"),
            vec!["default.xex".to_string(), "-dvd".to_string()],
        );
        assert_eq!(console.system_command_line(), "\"default.xex\" -dvd");

        let bare = HostConsole::new(PathBuf::from("unused"), vec!["default.xex".to_string()]);
        assert_eq!(bare.system_command_line(), "\"default.xex\"");
    }
}
