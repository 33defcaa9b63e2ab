// SPDX-License-Identifier: MPL-2.0
//! Saved state of a clock face across a teardown/recreate cycle.
//!
//! The typed [`ClockSnapshot`] is what the face produces and consumes. Its
//! flat [`Bundle`] form keys each value by name, and [`Bundle::to_bytes`]
//! encodes that mapping as CBOR for hosts that need to carry it as bytes.

use super::color::ClockColor;
use super::style::ClockStyle;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const KEY_SUPER_STATE: &str = "superState";
pub const KEY_BASE_COLOR: &str = "baseColor";
pub const KEY_TEXT_COLOR: &str = "textColor";
pub const KEY_FRAME_COLOR: &str = "frameColor";
pub const KEY_HOUR_HAND_COLOR: &str = "hourHandColor";
pub const KEY_MINUTE_HAND_COLOR: &str = "minuteHandColor";
pub const KEY_SECOND_HAND_COLOR: &str = "secondHandColor";
pub const KEY_DOTS_COLOR: &str = "dotsColor";

/// Saved colors plus the opaque state of the parent view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// Parent state, passed through untouched.
    pub super_state: Option<Vec<u8>>,
    pub style: ClockStyle,
}

/// A value stored in a [`Bundle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BundleValue {
    Int(i32),
    Bytes(Vec<u8>),
}

/// Flat key-value form of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundle(BTreeMap<String, BundleValue>);

impl Bundle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_int(&mut self, key: &str, value: i32) {
        self.0.insert(key.to_string(), BundleValue::Int(value));
    }

    pub fn put_bytes(&mut self, key: &str, value: Vec<u8>) {
        self.0.insert(key.to_string(), BundleValue::Bytes(value));
    }

    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<i32> {
        match self.0.get(key)? {
            BundleValue::Int(value) => Some(*value),
            BundleValue::Bytes(_) => None,
        }
    }

    #[must_use]
    pub fn get_bytes(&self, key: &str) -> Option<&[u8]> {
        match self.0.get(key)? {
            BundleValue::Bytes(value) => Some(value),
            BundleValue::Int(_) => None,
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<BundleValue> {
        self.0.remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encodes the bundle as CBOR.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        ciborium::into_writer(self, &mut bytes).map_err(|e| Error::State(e.to_string()))?;
        Ok(bytes)
    }

    /// Decodes a CBOR bundle.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        ciborium::from_reader(bytes).map_err(|e| Error::State(e.to_string()))
    }
}

impl ClockSnapshot {
    #[must_use]
    pub fn to_bundle(&self) -> Bundle {
        let mut bundle = Bundle::new();
        if let Some(super_state) = &self.super_state {
            bundle.put_bytes(KEY_SUPER_STATE, super_state.clone());
        }
        bundle.put_int(KEY_BASE_COLOR, self.style.base.to_i32());
        bundle.put_int(KEY_TEXT_COLOR, self.style.text.to_i32());
        bundle.put_int(KEY_FRAME_COLOR, self.style.frame.to_i32());
        bundle.put_int(KEY_HOUR_HAND_COLOR, self.style.hour_hand.to_i32());
        bundle.put_int(KEY_MINUTE_HAND_COLOR, self.style.minute_hand.to_i32());
        bundle.put_int(KEY_SECOND_HAND_COLOR, self.style.second_hand.to_i32());
        bundle.put_int(KEY_DOTS_COLOR, self.style.dots.to_i32());
        bundle
    }

    /// Rebuilds a snapshot from its bundle form.
    ///
    /// Returns `None` when any color key is missing or holds bytes. A missing
    /// `superState` is allowed; a `superState` that is not bytes is not.
    #[must_use]
    pub fn from_bundle(bundle: &Bundle) -> Option<Self> {
        let color = |key: &str| bundle.get_int(key).map(ClockColor::from_i32);
        let super_state = match bundle.0.get(KEY_SUPER_STATE) {
            None => None,
            Some(BundleValue::Bytes(bytes)) => Some(bytes.clone()),
            Some(BundleValue::Int(_)) => return None,
        };

        Some(Self {
            super_state,
            style: ClockStyle {
                base: color(KEY_BASE_COLOR)?,
                text: color(KEY_TEXT_COLOR)?,
                frame: color(KEY_FRAME_COLOR)?,
                hour_hand: color(KEY_HOUR_HAND_COLOR)?,
                minute_hand: color(KEY_MINUTE_HAND_COLOR)?,
                second_hand: color(KEY_SECOND_HAND_COLOR)?,
                dots: color(KEY_DOTS_COLOR)?,
            },
        })
    }

    /// Encodes the snapshot as CBOR bytes of its bundle form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.to_bundle().to_bytes()
    }

    /// Decodes bytes produced by [`ClockSnapshot::to_bytes`].
    ///
    /// Anything that does not decode to a complete bundle yields `None`.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match Bundle::from_bytes(bytes) {
            Ok(bundle) => Self::from_bundle(&bundle),
            Err(err) => {
                tracing::debug!(%err, "discarding undecodable clock snapshot");
                None
            }
        }
    }
}
