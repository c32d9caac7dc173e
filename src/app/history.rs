//! Undo-Stack für Längenänderungen der Kette.

/// Ein Verlängerungsschritt: welches Gelenk vorher wo stand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthStep {
    /// Kettenindex des verschobenen Gelenks
    pub joint_index: usize,
    /// Position vor der Verlängerung
    pub previous_position: glam::Vec3,
}

/// Einfacher Undo-Manager für Verlängern/Verkürzen.
#[derive(Debug, Clone, Default)]
pub struct LengthHistory {
    undo_stack: Vec<LengthStep>,
    max_depth: usize,
}

impl LengthHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth.min(1024)),
            max_depth: max_depth.max(1),
        }
    }

    /// Legt einen Schritt ab; bei voller History fällt der älteste Eintrag weg.
    pub fn record(&mut self, step: LengthStep) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(step);
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Holt den jüngsten Schritt vom Stack.
    pub fn pop(&mut self) -> Option<LengthStep> {
        self.undo_stack.pop()
    }

    /// Anzahl gespeicherter Schritte.
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Gibt `true` zurück, wenn keine Schritte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    /// Verwirft alle Schritte.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
    }

    /// Ändert die maximale Tiefe; überzählige älteste Schritte fallen weg.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(1);
        let overflow = self.undo_stack.len().saturating_sub(self.max_depth);
        if overflow > 0 {
            self.undo_stack.drain(..overflow);
        }
    }
}
