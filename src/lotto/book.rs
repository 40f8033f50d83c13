use crate::lotto::config::LottoNumber;
use crate::lotto::error::{LottoError, Result};
use crate::lotto::ticket::{Ticket, TicketGenerator};
use crate::random::RandomNumberSource;

/// Boletos comprados en la ronda actual.
///
/// Sólo crece con las compras y sólo se vacía con `reset`. Toda compra es
/// "todo o nada": si falla, el libro queda exactamente igual.
#[derive(Debug, Clone)]
pub struct TicketBook {
    tickets: Vec<Ticket>,
    ticket_price: u64,
    max_tickets_per_purchase: u64,
}

impl TicketBook {
    pub fn new(ticket_price: u64, max_tickets_per_purchase: u64) -> Self {
        Self {
            tickets: Vec::new(),
            ticket_price,
            max_tickets_per_purchase,
        }
    }

    /// Compra automática: `amount_spent / ticket_price` boletos al azar.
    ///
    /// Devuelve sólo los boletos nuevos; `tickets()` tiene la lista completa.
    pub fn purchase<S: RandomNumberSource>(
        &mut self,
        amount_spent: u64,
        generator: &mut TicketGenerator<S>,
    ) -> Result<&[Ticket]> {
        let count = self.ticket_count_for(amount_spent)?;

        // generar todo antes de tocar el libro
        let mut fresh = Vec::with_capacity(count as usize);
        for _ in 0..count {
            fresh.push(generator.generate()?);
        }

        let start = self.tickets.len();
        self.tickets.extend(fresh);
        Ok(&self.tickets[start..])
    }

    /// Compra manual de un boleto con números elegidos por el usuario.
    ///
    /// # Panics
    ///
    /// Si `numbers` no trae exactamente `TICKET_SIZE` números.
    pub fn purchase_manual(&mut self, numbers: &[LottoNumber], max_number: LottoNumber) -> Result<&Ticket> {
        let ticket = Ticket::new(numbers, max_number)?;
        self.tickets.push(ticket);
        Ok(&self.tickets[self.tickets.len() - 1])
    }

    fn ticket_count_for(&self, amount_spent: u64) -> Result<u64> {
        // con precio 0 ningún monto es válido
        let rem = amount_spent.checked_rem(self.ticket_price);
        let count = match (rem, amount_spent.checked_div(self.ticket_price)) {
            (Some(0), Some(count)) if count > 0 => count,
            _ => {
                return Err(LottoError::InvalidAmount {
                    amount: amount_spent,
                    ticket_price: self.ticket_price,
                })
            }
        };
        if count > self.max_tickets_per_purchase {
            return Err(LottoError::PurchaseLimitExceeded {
                requested: count,
                limit: self.max_tickets_per_purchase,
            });
        }
        Ok(count)
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn ticket_price(&self) -> u64 {
        self.ticket_price
    }

    pub fn total_spent(&self) -> u64 {
        (self.tickets.len() as u64).saturating_mul(self.ticket_price)
    }

    pub fn reset(&mut self) {
        self.tickets.clear();
    }
}
