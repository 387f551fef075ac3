//! The checklist questions that pair a Yes/No answer with its evidence list.

use super::model::FieldKey;

/// A Yes/No checklist question paired with its evidence list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistQuestion {
    /// Question text as displayed, including its number.
    pub prompt: &'static str,
    pub answer: FieldKey,
    pub evidence: FieldKey,
}

impl ChecklistQuestion {
    const fn new(prompt: &'static str, answer: FieldKey, evidence: FieldKey) -> Self {
        Self {
            prompt,
            answer,
            evidence,
        }
    }
}

/// The checklist questions in rendering order.
pub static CHECKLIST: [ChecklistQuestion; 11] = [
    ChecklistQuestion::new(
        "8. A carga está contemplada no PBT do veículo?",
        FieldKey::PbtCompliant,
        FieldKey::PbtEvidence,
    ),
    ChecklistQuestion::new(
        "11. Existem espaços entre um palete e outro que possam ocasionar movimentações da carga?",
        FieldKey::PalletSpaces,
        FieldKey::PalletSpacesEvidence,
    ),
    ChecklistQuestion::new(
        "13. Os paletes estão tombados?",
        FieldKey::PalletsTipped,
        FieldKey::PalletsTippedEvidence,
    ),
    ChecklistQuestion::new(
        "15. Há indício de falta de stretch na carga paletizada?",
        FieldKey::StretchMissing,
        FieldKey::StretchMissingEvidence,
    ),
    ChecklistQuestion::new(
        "17. A quantidade de madeirites está correta?",
        FieldKey::WoodCorrectAmount,
        FieldKey::WoodCorrectAmountEvidence,
    ),
    ChecklistQuestion::new(
        "19. Há presença de madeirite fora da espessura padrão de no mínimo 1 cm?",
        FieldKey::WoodWrongThickness,
        FieldKey::WoodWrongThicknessEvidence,
    ),
    ChecklistQuestion::new(
        "21. Existem espaçamento anormal entre os madeirites?",
        FieldKey::WoodAbnormalSpacing,
        FieldKey::WoodAbnormalSpacingEvidence,
    ),
    ChecklistQuestion::new(
        "23. Os madeirites estão alocados corretamente na guia interna?",
        FieldKey::WoodCorrectlyPlaced,
        FieldKey::WoodCorrectlyPlacedEvidence,
    ),
    ChecklistQuestion::new(
        "25. Há presença de cordas internas unindo as réguas entre os madeirites?",
        FieldKey::InternalRopes,
        FieldKey::InternalRopesEvidence,
    ),
    ChecklistQuestion::new(
        "27. As cintas catracas estão por cima dos madeirites gerando apoio à carga?",
        FieldKey::RatchetStrapsOverWood,
        FieldKey::RatchetStrapsOverWoodEvidence,
    ),
    ChecklistQuestion::new(
        "29. O carregamento foi feito de forma uniforme e padronizado?",
        FieldKey::UniformLoading,
        FieldKey::UniformLoadingEvidence,
    ),
];

/// Builds the evidence input label for a question prompt.
///
/// Drops the leading `"NN. "` number and everything from the first `?`.
pub fn evidence_label(prompt: &str) -> String {
    let body = prompt
        .split_once(". ")
        .map(|(_, rest)| rest)
        .unwrap_or(prompt);
    let body = body.split('?').next().unwrap_or(body);
    format!("Evidência para \"{}\"", body.trim())
}

/// Finds the question answered under `key`.
pub fn question_for_answer(key: FieldKey) -> Option<&'static ChecklistQuestion> {
    CHECKLIST.iter().find(|q| q.answer == key)
}

/// Finds the question whose evidence list is stored under `key`.
pub fn question_for_evidence(key: FieldKey) -> Option<&'static ChecklistQuestion> {
    CHECKLIST.iter().find(|q| q.evidence == key)
}
