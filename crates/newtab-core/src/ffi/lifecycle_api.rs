use super::*;

#[uniffi::export]
impl NewTabPageCore {
    /// Create a new NewTabPageCore instance.
    /// This is the entry point for the FFI API.
    #[uniffi::constructor]
    pub fn new() -> Self {
        let outbox = Arc::new(Outbox::default());
        Self {
            initialized: AtomicBool::new(false),
            data_dir: RwLock::new(None),
            intro_store: RwLock::new(None),
            intro_model: RwLock::new(None),
            favorites_model: RwLock::new(None),
            pixels: Arc::new(PixelBridge {
                stats: SharedPixelStats::new(),
                outbox: outbox.clone(),
                callback: RwLock::new(None),
            }),
            changes: Arc::new(ChangeBridge {
                outbox: outbox.clone(),
                callback: RwLock::new(None),
            }),
            favorites_delegate: Arc::new(FavoritesBridge {
                outbox: outbox.clone(),
                callback: RwLock::new(None),
            }),
            outbox,
        }
    }

    /// Initialize the core over `data_dir`. Must be called before other operations.
    /// Calling it again on an initialized core is a no-op.
    pub fn init(&self, data_dir: String) -> Result<(), NewTabPageError> {
        if self.initialized.load(Ordering::SeqCst) {
            tracing::debug!("ffi.init already initialized");
            return Ok(());
        }

        let config = CoreConfig::new(&data_dir);
        let (intro_store, intro, favorites) = self.build_models(&config);
        if let Some(err) = intro_store.last_error() {
            tracing::warn!("Preferences unavailable, intro message hidden: {}", err);
        }

        *self
            .intro_store
            .write()
            .map_err(|_| Self::lock_error("intro_store"))? = Some(intro_store);
        *self
            .intro_model
            .write()
            .map_err(|_| Self::lock_error("intro_model"))? = Some(intro);
        *self
            .favorites_model
            .write()
            .map_err(|_| Self::lock_error("favorites_model"))? = Some(favorites);
        *self
            .data_dir
            .write()
            .map_err(|_| Self::lock_error("data_dir"))? = Some(config.data_dir.clone());

        self.initialized.store(true, Ordering::SeqCst);
        tracing::info!(data_dir = %config.data_dir.display(), "new tab page core initialized");
        Ok(())
    }

    /// Initialize over the platform default data directory.
    pub fn init_default(&self) -> Result<(), NewTabPageError> {
        let data_dir = crate::config::default_data_dir();
        self.init(data_dir.to_string_lossy().into_owned())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// Data directory passed to `init`, if any.
    pub fn data_dir(&self) -> Option<String> {
        self.data_dir
            .read()
            .ok()
            .and_then(|g| g.as_ref().map(|p| p.to_string_lossy().into_owned()))
    }

    pub fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

impl Default for NewTabPageCore {
    fn default() -> Self {
        Self::new()
    }
}
