use crate::shared::ChainOptions;

/// UI-bezogener Anwendungszustand (Eingaben und Anzeigen)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Rohtext des Dauer-Eingabefelds
    pub duration_input: String,
    /// Modus-Umschalter: koordiniert (true) oder sequenziell (false)
    pub coordinated: bool,
    /// Anzeige des aktuellen Rotationswinkels
    pub rotation_display: String,
    /// Anzeige der kumulierten Verlängerung
    pub length_display: String,
    /// Ob der Options-Bereich aufgeklappt ist
    pub show_options: bool,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new(options: &ChainOptions) -> Self {
        Self {
            duration_input: String::new(),
            coordinated: options.coordinated_default,
            rotation_display: "0".to_string(),
            length_display: format_length(0.0),
            show_options: false,
        }
    }
}

/// Formatiert die kumulierte Verlängerung für die Anzeige.
pub(crate) fn format_length(length: f32) -> String {
    format!("{length:.1}")
}

/// Formatiert einen Winkel für die Anzeige (ganze Grad, abgerundet).
pub(crate) fn format_angle(angle_deg: f32) -> String {
    format!("{}", angle_deg.floor() as i32)
}
