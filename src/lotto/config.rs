use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::lotto::benefit::Rank;
use crate::lotto::error::ConfigError;

/// Tipo de los números de un boleto.
pub type LottoNumber = u8;

/// Cantidad de números por boleto (fija).
pub const TICKET_SIZE: usize = 6;

pub const DEFAULT_MAX_NUMBER: LottoNumber = 45;
pub const DEFAULT_TICKET_PRICE: u64 = 1_000;
pub const DEFAULT_MAX_TICKETS_PER_PURCHASE: u64 = 100;

/// Premio por rango.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutTable {
    prizes: BTreeMap<Rank, u64>,
}

impl PayoutTable {
    pub fn new(prizes: impl IntoIterator<Item = (Rank, u64)>) -> Self {
        Self { prizes: prizes.into_iter().collect() }
    }

    /// Premio de `rank`; 0 si no está en la tabla.
    pub fn prize(&self, rank: Rank) -> u64 {
        self.prizes.get(&rank).copied().unwrap_or(0)
    }

    /// De 1º a 5º premio.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Rank, u64)> + '_ {
        self.prizes.iter().map(|(&rank, &prize)| (rank, prize))
    }
}

/// Configuración por defecto (6/45), creada una sola vez.
static DEFAULT_CONFIG: Lazy<LottoConfig> = Lazy::new(|| LottoConfig {
    max_number: DEFAULT_MAX_NUMBER,
    ticket_price: DEFAULT_TICKET_PRICE,
    max_tickets_per_purchase: DEFAULT_MAX_TICKETS_PER_PURCHASE,
    payouts: PayoutTable::new([
        (Rank::First, 2_000_000_000),
        (Rank::Second, 30_000_000),
        (Rank::Third, 1_500_000),
        (Rank::Fourth, 50_000),
        (Rank::Fifth, 5_000),
    ]),
});

/// Parámetros de una ronda. Se validan una vez, al construir el motor.
///
/// ```rust
/// use lucky_lotto::lotto::config::LottoConfig;
///
/// let config = LottoConfig::default().with_ticket_price(500);
/// assert_eq!(config.ticket_price, 500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LottoConfig {
    /// Número más alto que se puede sortear (el mínimo siempre es 1).
    pub max_number: LottoNumber,
    pub ticket_price: u64,
    pub max_tickets_per_purchase: u64,
    pub payouts: PayoutTable,
}

impl Default for LottoConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl LottoConfig {
    pub fn with_max_number(mut self, max_number: LottoNumber) -> Self {
        self.max_number = max_number;
        self
    }

    pub fn with_ticket_price(mut self, ticket_price: u64) -> Self {
        self.ticket_price = ticket_price;
        self
    }

    pub fn with_max_tickets_per_purchase(mut self, limit: u64) -> Self {
        self.max_tickets_per_purchase = limit;
        self
    }

    pub fn with_payouts(mut self, payouts: PayoutTable) -> Self {
        self.payouts = payouts;
        self
    }

    /// Revisa que la configuración permita jugar una ronda completa.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ticket_price == 0 {
            return Err(ConfigError::ZeroTicketPrice);
        }
        if self.max_tickets_per_purchase == 0 {
            return Err(ConfigError::ZeroPurchaseLimit);
        }
        // una combinación ganadora necesita TICKET_SIZE + 1 números distintos
        let required = (TICKET_SIZE + 1) as LottoNumber;
        if self.max_number < required {
            return Err(ConfigError::MaxNumberTooSmall { max_number: self.max_number, required });
        }
        for rank in Rank::ALL {
            if !self.payouts.prizes.contains_key(&rank) {
                return Err(ConfigError::MissingPayout { rank });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = LottoConfig::default();
        assert_eq!(config.max_number, 45);
        assert_eq!(config.ticket_price, 1_000);
        assert_eq!(config.payouts.prize(Rank::First), 2_000_000_000);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_degenerate_configs() {
        assert_eq!(
            LottoConfig::default().with_ticket_price(0).validate(),
            Err(ConfigError::ZeroTicketPrice)
        );
        assert_eq!(
            LottoConfig::default().with_max_tickets_per_purchase(0).validate(),
            Err(ConfigError::ZeroPurchaseLimit)
        );
        assert_eq!(
            LottoConfig::default().with_max_number(6).validate(),
            Err(ConfigError::MaxNumberTooSmall { max_number: 6, required: 7 })
        );
    }

    #[test]
    fn rejects_missing_payout() {
        let payouts = PayoutTable::new([
            (Rank::First, 100),
            (Rank::Second, 50),
            (Rank::Third, 10),
            (Rank::Fourth, 5),
        ]);
        assert_eq!(
            LottoConfig::default().with_payouts(payouts).validate(),
            Err(ConfigError::MissingPayout { rank: Rank::Fifth })
        );
    }
}
