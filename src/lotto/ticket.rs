use std::fmt;

use crate::lotto::config::{LottoNumber, TICKET_SIZE};
use crate::lotto::error::{LottoError, Result};
use crate::random::RandomNumberSource;

/// Un boleto: `TICKET_SIZE` números distintos, guardados en orden ascendente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    numbers: [LottoNumber; TICKET_SIZE],
}

impl Ticket {
    /// Arma un boleto con números elegidos a mano.
    ///
    /// Se revisan en orden de entrada: el primero fuera de `[1, max_number]`
    /// o repetido es el error que se devuelve.
    ///
    /// # Panics
    ///
    /// Si `numbers` no trae exactamente `TICKET_SIZE` números.
    pub fn new(numbers: &[LottoNumber], max_number: LottoNumber) -> Result<Self> {
        assert_eq!(
            numbers.len(),
            TICKET_SIZE,
            "un boleto necesita exactamente {TICKET_SIZE} números"
        );
        check_numbers(numbers, &[], max_number)?;
        Ok(Self::from_distinct(numbers))
    }

    /// Sin validar; los números ya son distintos y están en rango.
    pub(crate) fn from_distinct(numbers: &[LottoNumber]) -> Self {
        let mut sorted = [0; TICKET_SIZE];
        sorted.copy_from_slice(numbers);
        sorted.sort_unstable();
        Self { numbers: sorted }
    }

    pub fn numbers(&self) -> &[LottoNumber; TICKET_SIZE] {
        &self.numbers
    }

    pub fn contains(&self, number: LottoNumber) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }

    /// Cuántos números comparte con `other`.
    pub fn match_count(&self, other: &Ticket) -> usize {
        self.numbers.iter().filter(|&&n| other.contains(n)).count()
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.numbers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// Revisa rango y repetidos en orden de entrada. `seen` son números ya
/// ocupados (por ejemplo el bonus) contra los que también se compara.
pub(crate) fn check_numbers(
    numbers: &[LottoNumber],
    seen: &[LottoNumber],
    max_number: LottoNumber,
) -> Result<()> {
    let mut taken: Vec<LottoNumber> = seen.to_vec();
    for &number in numbers {
        if !(1..=max_number).contains(&number) {
            return Err(LottoError::OutOfRange { number, max: max_number });
        }
        if taken.contains(&number) {
            return Err(LottoError::DuplicateNumber { number });
        }
        taken.push(number);
    }
    Ok(())
}

/// Genera boletos automáticos a partir de una [`RandomNumberSource`].
#[derive(Debug, Clone)]
pub struct TicketGenerator<S> {
    source: S,
    max_number: LottoNumber,
}

impl<S: RandomNumberSource> TicketGenerator<S> {
    pub fn new(source: S, max_number: LottoNumber) -> Self {
        Self { source, max_number }
    }

    pub fn generate(&mut self) -> Result<Ticket> {
        let drawn = self.source.draw_unique(TICKET_SIZE, 1, self.max_number)?;
        Ok(Ticket::from_distinct(&drawn))
    }
}
