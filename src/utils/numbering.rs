//! Numeración secuencial de documentos
//!
//! Formato `<PREFIJO>-<AÑO>-<SECUENCIA>` con la secuencia rellenada a 3 dígitos.
//! La secuencia es `tamaño de la colección + 1`: solo es única dentro del
//! proceso y puede repetirse después de un borrado.

pub const QUOTE_PREFIX: &str = "ORC";
pub const QUOTE_REQUEST_PREFIX: &str = "SOL";
pub const SERVICE_ORDER_PREFIX: &str = "OS";

/// Siguiente valor de secuencia para una colección de `current_len` elementos
pub fn next_sequence(current_len: usize) -> usize {
    current_len + 1
}

/// Formatea un número de documento, p. ej. `ORC-2024-003`
pub fn format_number(prefix: &str, year: i32, sequence: usize) -> String {
    format!("{}-{:04}-{:03}", prefix, year, sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads_sequence() {
        assert_eq!(format_number(QUOTE_PREFIX, 2024, 3), "ORC-2024-003");
        assert_eq!(format_number(QUOTE_REQUEST_PREFIX, 2024, 12), "SOL-2024-012");
        assert_eq!(format_number(SERVICE_ORDER_PREFIX, 2025, 1234), "OS-2025-1234");
    }

    #[test]
    fn test_next_sequence_is_length_plus_one() {
        assert_eq!(next_sequence(0), 1);
        assert_eq!(next_sequence(3), 4);
    }
}
