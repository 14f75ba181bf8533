use std::{
    env,
    ffi::OsString,
    sync::{Mutex, MutexGuard, PoisonError},
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets process environment variables for the lifetime of the guard.
///
/// Guards serialize on a global lock and restore every touched variable on
/// drop, including when the test panics.
pub struct EnvGuard {
    saved: Vec<(String, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub fn set<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<OsString>,
    {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let mut saved = Vec::new();

        for (key, value) in vars {
            let key = key.into();
            saved.push((key.clone(), env::var_os(&key)));
            // SAFETY: every mutation of the process environment in this test
            // binary happens while holding ENV_LOCK.
            unsafe { env::set_var(&key, value.into()) };
        }

        Self { saved, _lock: lock }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            // SAFETY: ENV_LOCK is still held by this guard.
            unsafe {
                match value {
                    Some(value) => env::set_var(&key, value),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}
