use gloo::storage::{LocalStorage, Storage};
use serde::{Serialize, de::DeserializeOwned};

/// Key a value is stored under in the browser's local storage.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalOrDefault: Sized {
    fn local_or_default() -> Self;
    fn local_save(&self);
}

impl<T> LocalOrDefault for T
where
    T: StorageKey + Default + Serialize + DeserializeOwned,
{
    fn local_or_default() -> Self {
        LocalStorage::get(T::KEY).unwrap_or_else(|err| {
            log::debug!("nothing usable stored at {}: {}", T::KEY, err);
            T::default()
        })
    }

    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(T::KEY, self) {
            log::error!("could not save {} to local storage: {:?}", T::KEY, err);
        }
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use pairflip_core::Difficulty;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn settings_round_trip_through_local_storage() {
        LocalStorage::delete(Settings::KEY);
        assert_eq!(Settings::local_or_default(), Settings::default());

        let settings = Settings {
            difficulty: Difficulty::Hard,
        };
        settings.local_save();
        assert_eq!(Settings::local_or_default(), settings);

        LocalStorage::delete(Settings::KEY);
    }

    #[wasm_bindgen_test]
    fn unreadable_storage_falls_back_to_default() {
        LocalStorage::set(Settings::KEY, "not settings").unwrap();
        assert_eq!(Settings::local_or_default(), Settings::default());

        LocalStorage::delete(Settings::KEY);
    }
}
