use core::time::Duration;
use gloo::storage::{LocalStorage, Storage};
use memshuffle_core::MAX_TIMER_MS;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Namespaced LocalStorage key for a persisted value.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalOrDefault {
    fn local_or_default() -> Self;
}

impl<T: StorageKey + DeserializeOwned + Default> LocalOrDefault for T {
    fn local_or_default() -> Self {
        LocalStorage::get(T::KEY).unwrap_or_else(|err| {
            log::debug!("no stored {}: {}", T::KEY, err);
            T::default()
        })
    }
}

pub(crate) trait LocalSave {
    fn local_save(&self);
}

impl<T: StorageKey + Serialize> LocalSave for T {
    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(T::KEY, self) {
            log::error!("failed to save {}: {}", T::KEY, err);
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

/// Milliseconds to hand to a gloo timer, which takes them as `i32`.
pub(crate) fn timer_millis(duration: Duration) -> u32 {
    duration.as_millis().min(u128::from(MAX_TIMER_MS)) as u32
}

/// Stat text, with an em dash while there is nothing to show.
pub(crate) fn format_stat<T: ToString>(value: Option<T>, suffix: &str) -> String {
    match value {
        Some(value) => format!("{}{}", value.to_string(), suffix),
        None => "—".to_string(),
    }
}
