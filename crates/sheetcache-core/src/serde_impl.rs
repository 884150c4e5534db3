//! Serde support (behind the `serde` feature)
//!
//! References, ranges, labels and selections travel as their canonical text form, so JSON
//! reads `"B2"` rather than `{"row": 1, "column": 1}`.

use crate::label::LabelMapping;
use crate::range::CellRange;
use crate::reference::{CellReference, ColumnReference, LabelName, RowReference};
use crate::selection::{NonLabelSelection, Selection};
use crate::value::CellError;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

macro_rules! serde_as_text {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let text = String::deserialize(deserializer)?;
                    text.parse().map_err(de::Error::custom)
                }
            }
        )*
    };
}

serde_as_text!(
    ColumnReference,
    RowReference,
    CellReference,
    CellRange,
    LabelName,
    Selection,
    NonLabelSelection,
    CellError,
);

#[derive(Serialize, Deserialize)]
struct LabelMappingRepr {
    label: LabelName,
    target: Selection,
}

impl Serialize for LabelMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        LabelMappingRepr {
            label: self.label().clone(),
            target: self.target().clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LabelMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = LabelMappingRepr::deserialize(deserializer)?;
        LabelMapping::new(repr.label, repr.target).map_err(de::Error::custom)
    }
}
