use std::fmt;

use crate::lotto::config::LottoNumber;

/// Errores del motor de lotería.
///
/// Todos son recuperables: el motor nunca los suprime, los devuelve tal cual
/// a quien lo llamó y el estado de la ronda queda intacto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LottoError {
    /// El monto no es un múltiplo positivo del precio del boleto.
    InvalidAmount { amount: u64, ticket_price: u64 },
    /// Se pidieron más boletos de los permitidos en una sola compra.
    PurchaseLimitExceeded { requested: u64, limit: u64 },
    /// Un número fuera de `[1, max]`.
    OutOfRange { number: LottoNumber, max: LottoNumber },
    /// Un número repetido dentro de la misma combinación.
    DuplicateNumber { number: LottoNumber },
    /// Se pidió el resultado sin boletos comprados.
    NoTicketsPurchased,
    /// `draw_unique` no puede sacar `count` valores distintos de `[min, max]`.
    Range { count: usize, min: LottoNumber, max: LottoNumber },
    /// Ya hay una combinación ganadora aceptada en esta ronda.
    AnswerAlreadyAccepted,
}

impl fmt::Display for LottoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LottoError::InvalidAmount { amount, ticket_price } => write!(
                f,
                "el monto {amount} no es un múltiplo positivo del precio del boleto {ticket_price}"
            ),
            LottoError::PurchaseLimitExceeded { requested, limit } => write!(
                f,
                "no se pueden comprar {requested} boletos de una vez, el máximo es {limit}"
            ),
            LottoError::OutOfRange { number, max } => {
                write!(f, "el número {number} está fuera de rango [1, {max}]")
            }
            LottoError::DuplicateNumber { number } => {
                write!(f, "el número {number} está repetido")
            }
            LottoError::NoTicketsPurchased => write!(f, "no hay boletos comprados"),
            LottoError::Range { count, min, max } => write!(
                f,
                "no se pueden sacar {count} números distintos de [{min}, {max}]"
            ),
            LottoError::AnswerAlreadyAccepted => {
                write!(f, "ya se aceptó una combinación ganadora en esta ronda")
            }
        }
    }
}

impl std::error::Error for LottoError {}

/// Configuración inválida, detectada al construir el motor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroTicketPrice,
    ZeroPurchaseLimit,
    /// `max_number` no alcanza para una combinación + bonus.
    MaxNumberTooSmall { max_number: LottoNumber, required: LottoNumber },
    MissingPayout { rank: crate::lotto::benefit::Rank },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroTicketPrice => write!(f, "el precio del boleto tiene que ser mayor que cero"),
            ConfigError::ZeroPurchaseLimit => {
                write!(f, "el máximo de boletos por compra tiene que ser mayor que cero")
            }
            ConfigError::MaxNumberTooSmall { max_number, required } => write!(
                f,
                "el número máximo {max_number} es muy chico, se necesita al menos {required}"
            ),
            ConfigError::MissingPayout { rank } => write!(f, "no hay premio configurado para el {rank}"),
        }
    }
}

impl std::error::Error for ConfigError {}

pub type Result<T> = std::result::Result<T, LottoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = LottoError::InvalidAmount { amount: 1500, ticket_price: 1000 };
        assert_eq!(
            err.to_string(),
            "el monto 1500 no es un múltiplo positivo del precio del boleto 1000"
        );

        let err = LottoError::OutOfRange { number: 46, max: 45 };
        assert_eq!(err.to_string(), "el número 46 está fuera de rango [1, 45]");

        let err = ConfigError::MissingPayout { rank: crate::lotto::benefit::Rank::Fifth };
        assert_eq!(err.to_string(), "no hay premio configurado para el 5º premio");
    }
}
