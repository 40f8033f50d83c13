use crate::lotto::config::{LottoNumber, TICKET_SIZE};
use crate::lotto::error::{LottoError, Result};
use crate::lotto::ticket::{check_numbers, Ticket};

/// Combinación ganadora aceptada: números base + bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    base: Ticket,
    bonus: LottoNumber,
}

impl Answer {
    pub fn base(&self) -> &Ticket {
        &self.base
    }

    pub fn bonus(&self) -> LottoNumber {
        self.bonus
    }
}

/// Valida una combinación ganadora.
///
/// Orden de revisión (el primer error encontrado es el que se devuelve):
/// 1. el bonus debe estar en `[1, max_number]`;
/// 2. cada número base, en orden de entrada, debe estar en rango y no
///    repetir al bonus ni a un número base anterior.
///
/// Los números base no tienen que venir ordenados.
///
/// # Panics
///
/// Si `base` no trae exactamente `TICKET_SIZE` números.
///
/// ```rust
/// use lucky_lotto::lotto::answer::validate;
/// use lucky_lotto::lotto::error::LottoError;
///
/// assert!(validate(&[1, 2, 3, 4, 5, 6], 7, 45).is_ok());
/// assert_eq!(
///     validate(&[1, 2, 3, 4, 5, 6], 6, 45),
///     Err(LottoError::DuplicateNumber { number: 6 })
/// );
/// ```
pub fn validate(base: &[LottoNumber], bonus: LottoNumber, max_number: LottoNumber) -> Result<Answer> {
    assert_eq!(
        base.len(),
        TICKET_SIZE,
        "una combinación ganadora necesita exactamente {TICKET_SIZE} números base"
    );

    if !(1..=max_number).contains(&bonus) {
        return Err(LottoError::OutOfRange { number: bonus, max: max_number });
    }
    check_numbers(base, &[bonus], max_number)?;

    Ok(Answer { base: Ticket::from_distinct(base), bonus })
}
