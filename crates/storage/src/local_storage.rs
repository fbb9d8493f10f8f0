use std::collections::VecDeque;

use fitcoach_web_app::log;
use gloo_storage::Storage as GlooStorage;

const KEY_LOG: &str = "log";
const MAX_LOG_ENTRIES: usize = 100;

/// Log entries kept in the browser's local storage, newest first.
pub struct Log;

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(MAX_LOG_ENTRIES);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use fitcoach_web_app::log::{Entry, Level, Repository};
        use gloo_storage::Storage as GlooStorage;
        use pretty_assertions::assert_eq;
        use wasm_bindgen_test::wasm_bindgen_test;

        use super::super::*;

        fn entry(message: &str) -> Entry {
            Entry {
                time: "Oct 19 10:00:00".to_string(),
                level: Level::Info,
                message: message.to_string(),
            }
        }

        #[wasm_bindgen_test]
        fn test_log() {
            gloo_storage::LocalStorage::delete(KEY_LOG);
            assert!(Log.read_entries().unwrap().is_empty());

            Log.write_entry(entry("first")).unwrap();
            Log.write_entry(entry("second")).unwrap();

            assert_eq!(
                Log.read_entries()
                    .unwrap()
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>(),
                vec!["second", "first"]
            );
        }

        #[wasm_bindgen_test]
        fn test_log_keeps_newest_entries() {
            gloo_storage::LocalStorage::delete(KEY_LOG);
            for i in 0..=MAX_LOG_ENTRIES {
                Log.write_entry(entry(&i.to_string())).unwrap();
            }

            let entries = Log.read_entries().unwrap();
            assert_eq!(entries.len(), MAX_LOG_ENTRIES);
            assert_eq!(entries[0].message, MAX_LOG_ENTRIES.to_string());
            assert_eq!(entries[MAX_LOG_ENTRIES - 1].message, "1");
        }
    }
}
