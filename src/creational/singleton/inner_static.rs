// Inner static singleton: the storage lives inside the accessor, so it is
// lazy and thread-safe without any hand-written locking.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use tracing::info;

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct InnerStaticSingleton {
    _private: (),
}

impl InnerStaticSingleton {
    pub fn instance() -> &'static InnerStaticSingleton {
        static INSTANCE: OnceLock<InnerStaticSingleton> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
            info!("Initialising InnerStaticSingleton");
            InnerStaticSingleton { _private: () }
        })
    }

    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}

impl fmt::Display for InnerStaticSingleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InnerStaticSingleton@{:p}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_threads_share_instance() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| InnerStaticSingleton::instance() as *const _ as usize))
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(addresses.iter().all(|&a| a == addresses[0]));
        assert_eq!(InnerStaticSingleton::constructions(), 1);
    }

    #[test]
    fn test_display_names_type() {
        let shown = InnerStaticSingleton::instance().to_string();
        assert!(shown.starts_with("InnerStaticSingleton@"));
    }
}
