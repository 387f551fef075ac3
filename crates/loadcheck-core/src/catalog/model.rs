//! Field keys, kinds and choice options of the inspection form.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, IntoEnumIterator};

/// Every field of the inspection form, in declaration order.
///
/// Declaration order is also the order in which fields are encoded for the
/// transport. The string form (`Display` / `FromStr`) is the wire key.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FieldKey {
    Date,
    Carrier,
    GlobalProcessNumber,
    VehiclePlate,
    #[strum(serialize = "implement1Plate")]
    Implement1Plate,
    #[strum(serialize = "implement2Plate")]
    Implement2Plate,
    VehicleConfig,
    PbtCompliant,
    PbtEvidence,
    LoadType,
    PalletSpaces,
    PalletSpacesEvidence,
    PalletsTipped,
    PalletsTippedEvidence,
    StretchMissing,
    StretchMissingEvidence,
    WoodCorrectAmount,
    WoodCorrectAmountEvidence,
    WoodWrongThickness,
    WoodWrongThicknessEvidence,
    WoodAbnormalSpacing,
    WoodAbnormalSpacingEvidence,
    WoodCorrectlyPlaced,
    WoodCorrectlyPlacedEvidence,
    InternalRopes,
    InternalRopesEvidence,
    RatchetStrapsOverWood,
    RatchetStrapsOverWoodEvidence,
    UniformLoading,
    UniformLoadingEvidence,
    GeneralRemarks,
}

impl FieldKey {
    /// Returns the wire key used for this field in the transport payload.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Position of this field in declaration order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the catalog entry describing this field.
    pub fn spec(self) -> &'static FieldSpec {
        &super::FIELDS[self.index()]
    }

    /// Returns the declared kind of this field.
    pub fn kind(self) -> FieldKind {
        self.spec().kind
    }

    /// Iterates over every field in declaration order.
    pub fn all() -> impl Iterator<Item = FieldKey> {
        Self::iter()
    }
}

/// The semantic type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Calendar date, entered as text (`YYYY-MM-DD`).
    Date,
    /// One of the eight vehicle silhouettes.
    VehicleConfig,
    /// A `Sim` / `Não` checklist answer.
    YesNo,
    /// One of the three load types.
    LoadType,
    /// An ordered list of attached files.
    Files,
}

impl FieldKind {
    /// Returns the literal options accepted by a choice kind.
    ///
    /// Free-form and file kinds return an empty slice.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            FieldKind::VehicleConfig => &VEHICLE_CONFIG_OPTIONS,
            FieldKind::YesNo => &YES_NO_OPTIONS,
            FieldKind::LoadType => &LOAD_TYPE_OPTIONS,
            FieldKind::Text | FieldKind::Date | FieldKind::Files => &[],
        }
    }

    /// Whether values of this kind are file lists rather than scalars.
    pub fn is_files(self) -> bool {
        matches!(self, FieldKind::Files)
    }
}

/// Static description of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: FieldKey,
    /// Label shown next to the input on the form.
    pub label: &'static str,
    pub kind: FieldKind,
    /// Presentation-layer "required" marker; never enforced by the store.
    pub required: bool,
    /// Upper bound on the number of attached files, for file kinds.
    pub max_files: Option<usize>,
}

// ============================================================================
// Choice options
// ============================================================================

/// Answer to a checklist question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
pub enum YesNo {
    #[serde(rename = "Sim")]
    #[strum(serialize = "Sim")]
    Yes,
    #[serde(rename = "Não")]
    #[strum(serialize = "Não")]
    No,
}

/// How the cargo was loaded onto the vehicle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
pub enum LoadType {
    #[serde(rename = "Paletizada")]
    #[strum(serialize = "Paletizada")]
    Palletized,
    #[serde(rename = "Batida")]
    #[strum(serialize = "Batida")]
    Loose,
    #[serde(rename = "Carregamento misto")]
    #[strum(serialize = "Carregamento misto")]
    Mixed,
}

/// Vehicle silhouette selected on the form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VehicleConfig {
    Toco,
    Truck,
    CarretaBau,
    CarretaSider,
    BitremBau,
    BitremSider,
    RodotremBau,
    RodotremSider,
}

impl VehicleConfig {
    /// Human-readable name shown under the silhouette.
    pub fn display_name(self) -> &'static str {
        match self {
            VehicleConfig::Toco => "Toco",
            VehicleConfig::Truck => "Truck",
            VehicleConfig::CarretaBau => "Carreta (BAÚ)",
            VehicleConfig::CarretaSider => "Carreta (SIDER)",
            VehicleConfig::BitremBau => "Bitrem (BAÚ)",
            VehicleConfig::BitremSider => "Bitrem (SIDER)",
            VehicleConfig::RodotremBau => "Rodotrem (BAÚ)",
            VehicleConfig::RodotremSider => "Rodotrem (SIDER)",
        }
    }
}

macro_rules! impl_wire_str {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                /// Returns the literal sent over the wire for this option.
                pub fn as_str(self) -> &'static str {
                    self.into()
                }
            }
        )*
    };
}

impl_wire_str!(YesNo, LoadType, VehicleConfig);

const YES_NO_OPTIONS: [&str; 2] = ["Sim", "Não"];
const LOAD_TYPE_OPTIONS: [&str; 3] = ["Paletizada", "Batida", "Carregamento misto"];
const VEHICLE_CONFIG_OPTIONS: [&str; 8] = [
    "toco",
    "truck",
    "carreta_bau",
    "carreta_sider",
    "bitrem_bau",
    "bitrem_sider",
    "rodotrem_bau",
    "rodotrem_sider",
];
