use lucky_lotto::lotto::{LottoConfig, LottoError, RankResult, Ticket};

/// Estado puramente visual: si se muestran los números de cada boleto.
/// El motor no se entera de nada de esto.
#[derive(Debug, Default)]
pub struct View {
    details_visible: bool,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_details(&mut self) {
        self.details_visible = !self.details_visible;
    }

    pub fn reset(&mut self) {
        self.details_visible = false;
    }

    /// Lista de boletos comprados + contador total.
    pub fn render_tickets(&self, tickets: &[Ticket]) -> String {
        let mut out = format!("Compraste {} boletos en total.\n", tickets.len());
        for ticket in tickets {
            if self.details_visible {
                out.push_str(&format!("  🎟️  {ticket}\n"));
            } else {
                out.push_str("  🎟️\n");
            }
        }
        out
    }

    pub fn render_result(&self, result: &RankResult, config: &LottoConfig) -> String {
        let mut out = String::from("📊 Resultado\naciertos | premio          | boletos\n");
        // de 5º a 1º, como en la tabla de premios
        for (rank, prize) in config.payouts.iter().rev() {
            let bonus = if rank.needs_bonus() { "+bonus" } else { "      " };
            out.push_str(&format!(
                "{}{} | {:>15} | {}\n",
                rank.match_count(),
                bonus,
                prize,
                result.count(rank)
            ));
        }
        out.push_str(&format!("Rendimiento total: {:.2}%\n", result.benefit_rate));
        out
    }

    /// Mensaje para el usuario según el error del motor.
    pub fn render_error(&self, err: &LottoError) -> String {
        match err {
            LottoError::InvalidAmount { ticket_price, .. } => {
                format!("⚠️ Ingresá el monto en unidades de {ticket_price}.")
            }
            LottoError::PurchaseLimitExceeded { limit, .. } => {
                format!("⚠️ Sólo se pueden comprar hasta {limit} boletos por vez.")
            }
            LottoError::OutOfRange { number, max } => {
                format!("⚠️ El número {number} tiene que estar entre 1 y {max}.")
            }
            LottoError::DuplicateNumber { number } => {
                format!("⚠️ El número {number} está repetido.")
            }
            LottoError::NoTicketsPurchased => "⚠️ Primero comprá algún boleto.".to_string(),
            LottoError::AnswerAlreadyAccepted => {
                "⚠️ Ya se ingresó la combinación ganadora; hacé `reset` para jugar otra ronda."
                    .to_string()
            }
            LottoError::Range { .. } => format!("⚠️ {err}"),
        }
    }
}
