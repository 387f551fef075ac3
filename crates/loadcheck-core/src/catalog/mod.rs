//! Field catalog module.
//!
//! Static definition of every field on the inspection form and of the
//! checklist questions that pair a Yes/No answer with its evidence list.
//!
//! # Module Structure
//!
//! - `model`: field keys, kinds and choice options (`FieldKey`, `FieldKind`, `YesNo`, ...)
//! - `checklist`: checklist questions (`ChecklistQuestion`, `CHECKLIST`)

mod checklist;
mod model;

pub use checklist::{
    CHECKLIST, ChecklistQuestion, evidence_label, question_for_answer, question_for_evidence,
};
pub use model::{FieldKey, FieldKind, FieldSpec, LoadType, VehicleConfig, YesNo};

/// Maximum number of files accepted for the general remarks list.
pub const GENERAL_REMARKS_MAX_FILES: usize = 10;

const fn text(key: FieldKey, label: &'static str, required: bool) -> FieldSpec {
    FieldSpec {
        key,
        label,
        kind: FieldKind::Text,
        required,
        max_files: None,
    }
}

const fn yes_no(key: FieldKey, label: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        label,
        kind: FieldKind::YesNo,
        required: true,
        max_files: None,
    }
}

const fn evidence(key: FieldKey, label: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        label,
        kind: FieldKind::Files,
        required: false,
        max_files: None,
    }
}

/// Every field of the form, indexed by `FieldKey::index()`.
pub static FIELDS: [FieldSpec; 31] = [
    FieldSpec {
        key: FieldKey::Date,
        label: "1. Data",
        kind: FieldKind::Date,
        required: true,
        max_files: None,
    },
    text(FieldKey::Carrier, "2. Transportadora", true),
    text(FieldKey::GlobalProcessNumber, "3. Número processo Global", true),
    text(FieldKey::VehiclePlate, "4. Placa automotor", true),
    text(FieldKey::Implement1Plate, "5. Placa 1º implemento", false),
    text(FieldKey::Implement2Plate, "6. Placa 2º implemento", false),
    FieldSpec {
        key: FieldKey::VehicleConfig,
        label: "7. Configuração do veículo",
        kind: FieldKind::VehicleConfig,
        required: true,
        max_files: None,
    },
    yes_no(
        FieldKey::PbtCompliant,
        "8. A carga está contemplada no PBT do veículo?",
    ),
    evidence(
        FieldKey::PbtEvidence,
        "Evidência para \"A carga está contemplada no PBT do veículo\"",
    ),
    FieldSpec {
        key: FieldKey::LoadType,
        label: "10. Tipo de carregamento",
        kind: FieldKind::LoadType,
        required: true,
        max_files: None,
    },
    yes_no(
        FieldKey::PalletSpaces,
        "11. Existem espaços entre um palete e outro que possam ocasionar movimentações da carga?",
    ),
    evidence(
        FieldKey::PalletSpacesEvidence,
        "Evidência para \"Existem espaços entre um palete e outro que possam ocasionar movimentações da carga\"",
    ),
    yes_no(FieldKey::PalletsTipped, "13. Os paletes estão tombados?"),
    evidence(
        FieldKey::PalletsTippedEvidence,
        "Evidência para \"Os paletes estão tombados\"",
    ),
    yes_no(
        FieldKey::StretchMissing,
        "15. Há indício de falta de stretch na carga paletizada?",
    ),
    evidence(
        FieldKey::StretchMissingEvidence,
        "Evidência para \"Há indício de falta de stretch na carga paletizada\"",
    ),
    yes_no(
        FieldKey::WoodCorrectAmount,
        "17. A quantidade de madeirites está correta?",
    ),
    evidence(
        FieldKey::WoodCorrectAmountEvidence,
        "Evidência para \"A quantidade de madeirites está correta\"",
    ),
    yes_no(
        FieldKey::WoodWrongThickness,
        "19. Há presença de madeirite fora da espessura padrão de no mínimo 1 cm?",
    ),
    evidence(
        FieldKey::WoodWrongThicknessEvidence,
        "Evidência para \"Há presença de madeirite fora da espessura padrão de no mínimo 1 cm\"",
    ),
    yes_no(
        FieldKey::WoodAbnormalSpacing,
        "21. Existem espaçamento anormal entre os madeirites?",
    ),
    evidence(
        FieldKey::WoodAbnormalSpacingEvidence,
        "Evidência para \"Existem espaçamento anormal entre os madeirites\"",
    ),
    yes_no(
        FieldKey::WoodCorrectlyPlaced,
        "23. Os madeirites estão alocados corretamente na guia interna?",
    ),
    evidence(
        FieldKey::WoodCorrectlyPlacedEvidence,
        "Evidência para \"Os madeirites estão alocados corretamente na guia interna\"",
    ),
    yes_no(
        FieldKey::InternalRopes,
        "25. Há presença de cordas internas unindo as réguas entre os madeirites?",
    ),
    evidence(
        FieldKey::InternalRopesEvidence,
        "Evidência para \"Há presença de cordas internas unindo as réguas entre os madeirites\"",
    ),
    yes_no(
        FieldKey::RatchetStrapsOverWood,
        "27. As cintas catracas estão por cima dos madeirites gerando apoio à carga?",
    ),
    evidence(
        FieldKey::RatchetStrapsOverWoodEvidence,
        "Evidência para \"As cintas catracas estão por cima dos madeirites gerando apoio à carga\"",
    ),
    yes_no(
        FieldKey::UniformLoading,
        "29. O carregamento foi feito de forma uniforme e padronizado?",
    ),
    evidence(
        FieldKey::UniformLoadingEvidence,
        "Evidência para \"O carregamento foi feito de forma uniforme e padronizado\"",
    ),
    FieldSpec {
        key: FieldKey::GeneralRemarks,
        label: "31. Registro gerais e avarias",
        kind: FieldKind::Files,
        required: true,
        max_files: Some(GENERAL_REMARKS_MAX_FILES),
    },
];
