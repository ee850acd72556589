//! Tabla centralizada de estados
//!
//! Todos los enums de estado, prioridad y urgencia exponen su código,
//! etiqueta y color desde aquí; la consola no repite `switch` por pantalla.

use serde::Serialize;

/// Presentación de un valor enumerado
pub trait StatusDisplay: Copy + 'static {
    /// Todos los valores en orden de presentación
    fn all() -> &'static [Self];

    /// Código estable usado en JSON
    fn code(&self) -> &'static str;

    /// Etiqueta en portugués para la consola
    fn label(&self) -> &'static str;

    /// Tono de color (`yellow`, `green`, ...)
    fn color(&self) -> &'static str;

    /// Clases del badge tal como las usa la consola
    fn badge_class(&self) -> String {
        let color = self.color();
        format!("bg-{c}-100 text-{c}-800 border-{c}-200", c = color)
    }
}

/// Entrada serializable de la tabla
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusEntry {
    pub code: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub badge_class: String,
}

impl StatusEntry {
    pub fn of<T: StatusDisplay>(value: T) -> Self {
        Self {
            code: value.code(),
            label: value.label(),
            color: value.color(),
            badge_class: value.badge_class(),
        }
    }

    pub fn table<T: StatusDisplay>() -> Vec<Self> {
        T::all().iter().copied().map(Self::of).collect()
    }
}

/// Etiqueta de "atrasado", que no es un estado real sino derivado
pub const OVERDUE_LABEL: &str = "Atrasado";
pub const OVERDUE_COLOR: &str = "red";

/// Entidades con un estado enumerado
pub trait HasStatus {
    type Status: Copy + PartialEq;

    fn status(&self) -> Self::Status;
}
