//! AXI4 channel identities.
//!
//! This module names the five sub-buses of an AXI4 interface and derives each
//! one's payload width from the configured field widths. A channel's payload
//! is the concatenation of the fields that channel carries; the pipeline
//! never looks inside it.

use std::fmt;

use crate::config::AxiConfig;

/// One of the five AXI4 channels.
///
/// The two response channels (B, R) flow from responder to requester; as
/// relays they are indistinguishable from the request channels and differ
/// only in payload width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxiChannel {
    /// Write address channel.
    Aw,
    /// Write data channel.
    W,
    /// Write response channel.
    B,
    /// Read address channel.
    Ar,
    /// Read data channel.
    R,
}

impl AxiChannel {
    /// All five channels, in write-address-first order.
    pub const ALL: [Self; 5] = [Self::Aw, Self::W, Self::B, Self::Ar, Self::R];

    /// The conventional channel name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aw => "AW",
            Self::W => "W",
            Self::B => "B",
            Self::Ar => "AR",
            Self::R => "R",
        }
    }

    /// Payload width of this channel in bits, per the configured field widths.
    ///
    /// Address channels concatenate id, address, and the burst control fields;
    /// the write data channel carries data, write strobes, and a last flag;
    /// response channels carry id and response code, plus data and a last
    /// flag on the read side.
    pub const fn payload_width(self, axi: &AxiConfig) -> usize {
        let address = axi.id_width
            + axi.addr_width
            + axi.len_width
            + axi.size_width
            + axi.burst_width
            + axi.lock_width
            + axi.cache_width
            + axi.prot_width;
        match self {
            Self::Aw | Self::Ar => address,
            Self::W => axi.data_width + axi.strb_width() + 1,
            Self::B => axi.id_width + axi.resp_width,
            Self::R => axi.id_width + axi.data_width + axi.resp_width + 1,
        }
    }
}

impl fmt::Display for AxiChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
