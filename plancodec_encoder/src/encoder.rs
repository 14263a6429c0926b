use crate::config::EncoderConfig;
use crate::dispatch::NodeWriter;
use crate::error::Result;
use crate::mode::{EncodeContext, SerializationMode};
use crate::wire::{DatumSizer, StorageSizer, WireBuf};
use plancodec_types::{List, Node};
use tracing::{debug, warn};

/// A complete encode: the tree followed by the trailing sentinel.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct EncodedTree {
    bytes: Vec<u8>,
}

impl EncodedTree {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Encodes whole trees. Holds the mode and, while cache-stripped, the range table that scans
/// are resolved against.
pub struct NodeEncoder<'rt> {
    config: EncoderConfig,
    sizer: Box<dyn DatumSizer>,
    mode: SerializationMode,
    range_table: Option<&'rt List>,
}

impl<'rt> NodeEncoder<'rt> {
    pub fn new(config: EncoderConfig) -> Self {
        Self::with_sizer(config, Box::new(StorageSizer))
    }

    pub fn with_sizer(config: EncoderConfig, sizer: Box<dyn DatumSizer>) -> Self {
        Self {
            config,
            sizer,
            mode: SerializationMode::Full,
            range_table: None,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(EncoderConfig::from_env()?))
    }

    pub fn mode(&self) -> SerializationMode {
        self.mode
    }

    /// Switches to [`SerializationMode::CacheStripped`] until the guard is left or dropped.
    ///
    /// The guard holds the encoder exclusively, so a second entry cannot happen while one is
    /// active.
    pub fn enter_cache_mode(&mut self, range_table: Option<&'rt List>) -> CacheModeGuard<'_, 'rt> {
        self.mode = SerializationMode::CacheStripped;
        self.range_table = range_table;
        debug!(with_range_table = range_table.is_some(), "entered cache-stripped mode");
        CacheModeGuard { enc: self }
    }

    /// Encodes `root` and appends the sentinel. On error nothing is returned.
    pub fn encode(&self, root: Option<&Node>) -> Result<EncodedTree> {
        let sizer = self.sizer.as_ref();
        let cx = match self.mode {
            SerializationMode::Full => EncodeContext::full(sizer),
            SerializationMode::CacheStripped => EncodeContext::cache_stripped(self.range_table, sizer),
        };

        let buf = WireBuf::with_capacity(self.config.initial_capacity);
        let mut w = NodeWriter::new(buf, cx);
        if let Err(e) = w.write_node(root) {
            warn!(mode = ?self.mode, error = %e, "abandoned encode");
            return Err(e);
        }
        let bytes = w.finish();

        debug!(mode = ?self.mode, len = bytes.len(), "encoded tree");
        Ok(EncodedTree { bytes })
    }
}

impl Default for NodeEncoder<'_> {
    fn default() -> Self {
        Self::new(EncoderConfig::default())
    }
}

/// An encoder in cache-stripped mode. Leaving, explicitly or by drop, restores full mode and
/// detaches the range table.
pub struct CacheModeGuard<'e, 'rt> {
    enc: &'e mut NodeEncoder<'rt>,
}

impl CacheModeGuard<'_, '_> {
    pub fn encode(&self, root: Option<&Node>) -> Result<EncodedTree> {
        self.enc.encode(root)
    }

    pub fn leave(self) {}
}

impl Drop for CacheModeGuard<'_, '_> {
    fn drop(&mut self) {
        self.enc.mode = SerializationMode::Full;
        self.enc.range_table = None;
        debug!("left cache-stripped mode");
    }
}

/// Full-fidelity encode with the default configuration.
pub fn encode(root: Option<&Node>) -> Result<EncodedTree> {
    NodeEncoder::default().encode(root)
}
