use crate::core::ChainModel;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Index des aktuell selektierten Gelenks
    pub selected_index: Option<usize>,
    /// Ursprüngliche Farbe des selektierten Gelenks (für Wiederherstellung beim Abwählen)
    pub original_color: Option<[f32; 4]>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_index: None,
            original_color: None,
        }
    }

    /// Selektierter Index, sofern er in der Kette gültig ist.
    pub fn selected_in(&self, chain: &ChainModel) -> Option<usize> {
        self.selected_index
            .filter(|&index| chain.contains_index(index))
    }

    /// Löst das effektive Endgelenk auf: selektiertes Gelenk, sonst das letzte.
    pub fn effective_end_joint(&self, chain: &ChainModel) -> usize {
        self.selected_in(chain)
            .unwrap_or_else(|| chain.last_index())
    }
}
