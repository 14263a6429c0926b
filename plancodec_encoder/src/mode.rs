use crate::wire::DatumSizer;
use plancodec_types::enums::RteKind;
use plancodec_types::{Index, List, Node, Oid};

/// Which fields an encode writes.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub enum SerializationMode {
    /// Everything the decoder reconstructs.
    #[default]
    Full,
    /// Leaves out costs, node ids, and per-invocation identifiers, so that structurally equal
    /// plans encode to equal bytes. The reader must be told out of band.
    CacheStripped,
}

/// Per-encode state threaded through every emission routine.
#[derive(Clone, Copy)]
pub struct EncodeContext<'a> {
    mode: SerializationMode,
    range_table: Option<&'a List>,
    sizer: &'a dyn DatumSizer,
}

impl<'a> EncodeContext<'a> {
    pub fn full(sizer: &'a dyn DatumSizer) -> Self {
        Self {
            mode: SerializationMode::Full,
            range_table: None,
            sizer,
        }
    }

    pub fn cache_stripped(range_table: Option<&'a List>, sizer: &'a dyn DatumSizer) -> Self {
        Self {
            mode: SerializationMode::CacheStripped,
            range_table,
            sizer,
        }
    }

    pub fn mode(&self) -> SerializationMode {
        self.mode
    }

    pub fn sizer(&self) -> &'a dyn DatumSizer {
        self.sizer
    }

    /// Whether mode-gated fields are written.
    pub fn writes_variable_fields(&self) -> bool {
        self.mode == SerializationMode::Full
    }

    /// The relation OID behind a range-table index, when cache-stripped with a range table
    /// attached and the entry is a relation.
    pub fn stable_relid(&self, rtindex: Index) -> Option<Oid> {
        if self.writes_variable_fields() {
            return None;
        }
        match self.range_table?.nth_node(rtindex as usize)? {
            Node::RangeTblEntry(rte) if rte.rtekind == RteKind::Relation => Some(rte.relid),
            _ => None,
        }
    }
}
