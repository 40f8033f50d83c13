use std::collections::BTreeMap;
use std::fmt;

use crate::lotto::answer::Answer;
use crate::lotto::config::PayoutTable;
use crate::lotto::error::{LottoError, Result};
use crate::lotto::ticket::Ticket;

/// Rango de premio. El orden es de mayor a menor premio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Rank {
    pub const ALL: [Rank; 5] = [Rank::First, Rank::Second, Rank::Third, Rank::Fourth, Rank::Fifth];

    /// Tabla 6/45: el bonus sólo separa el 2º del 3º.
    pub fn from_match(match_count: usize, bonus_match: bool) -> Option<Rank> {
        match (match_count, bonus_match) {
            (6, _) => Some(Rank::First),
            (5, true) => Some(Rank::Second),
            (5, false) => Some(Rank::Third),
            (4, _) => Some(Rank::Fourth),
            (3, _) => Some(Rank::Fifth),
            _ => None,
        }
    }

    /// Aciertos de números base que pide este rango.
    pub fn match_count(self) -> usize {
        match self {
            Rank::First => 6,
            Rank::Second | Rank::Third => 5,
            Rank::Fourth => 4,
            Rank::Fifth => 3,
        }
    }

    pub fn needs_bonus(self) -> bool {
        self == Rank::Second
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let place = match self {
            Rank::First => 1,
            Rank::Second => 2,
            Rank::Third => 3,
            Rank::Fourth => 4,
            Rank::Fifth => 5,
        };
        write!(f, "{place}º premio")
    }
}

/// Clasifica un boleto contra la combinación ganadora.
pub fn classify(ticket: &Ticket, answer: &Answer) -> Option<Rank> {
    let match_count = ticket.match_count(answer.base());
    let bonus_match = ticket.contains(answer.bonus());
    Rank::from_match(match_count, bonus_match)
}

/// Resultado de una ronda. Se recalcula cada vez que se pide.
#[derive(Debug, Clone, PartialEq)]
pub struct RankResult {
    /// Boletos por rango; los cinco rangos siempre están, aunque sea con 0.
    pub histogram: BTreeMap<Rank, usize>,
    /// Boletos con 2 aciertos o menos.
    pub unranked: usize,
    pub total_payout: u64,
    pub total_spent: u64,
    /// `total_payout / total_spent * 100`, redondeado a 2 decimales (half-up).
    pub benefit_rate: f64,
}

impl RankResult {
    pub fn count(&self, rank: Rank) -> usize {
        self.histogram.get(&rank).copied().unwrap_or(0)
    }
}

/// Compara todos los boletos contra `answer` y calcula el rendimiento.
///
/// Es una lectura pura: con los mismos boletos y la misma respuesta siempre
/// da el mismo resultado.
pub fn calc_benefit(
    tickets: &[Ticket],
    answer: &Answer,
    ticket_price: u64,
    payouts: &PayoutTable,
) -> Result<RankResult> {
    // sin gasto no hay rendimiento (tampoco con precio 0)
    let total_spent = (tickets.len() as u64).saturating_mul(ticket_price);
    if total_spent == 0 {
        return Err(LottoError::NoTicketsPurchased);
    }

    let mut histogram: BTreeMap<Rank, usize> = Rank::ALL.iter().map(|&rank| (rank, 0)).collect();
    let mut unranked = 0;
    let mut total_payout: u64 = 0;

    for ticket in tickets {
        match classify(ticket, answer) {
            Some(rank) => {
                *histogram.entry(rank).or_insert(0) += 1;
                total_payout = total_payout.saturating_add(payouts.prize(rank));
            }
            None => unranked += 1,
        }
    }

    Ok(RankResult {
        histogram,
        unranked,
        total_payout,
        total_spent,
        benefit_rate: benefit_rate_percent(total_payout, total_spent),
    })
}

/// Porcentaje con 2 decimales, redondeo half-up. Se calcula en puntos básicos
/// con enteros para que el resultado sea exacto. `spent` debe ser > 0.
fn benefit_rate_percent(payout: u64, spent: u64) -> f64 {
    let payout = payout as u128;
    let spent = spent as u128;
    let basis_points = (payout * 10_000 * 2 + spent) / (spent * 2);
    basis_points as f64 / 100.0
}
