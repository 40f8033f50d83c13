use crate::lotto::answer::{self, Answer};
use crate::lotto::benefit::{self, RankResult};
use crate::lotto::book::TicketBook;
use crate::lotto::config::{LottoConfig, LottoNumber};
use crate::lotto::error::{ConfigError, LottoError, Result};
use crate::lotto::ticket::{Ticket, TicketGenerator};
use crate::random::{RandomNumberSource, RngSource};

/// Estado de la ronda respecto a la combinación ganadora.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    NoAnswer,
    AnswerAccepted(Answer),
}

/// Motor de una ronda: configuración, generador, boletos y respuesta.
///
/// Una instancia por ronda/sesión; no hay estado global compartido.
///
/// ```rust
/// use lucky_lotto::lotto::config::LottoConfig;
/// use lucky_lotto::lotto::engine::LottoEngine;
///
/// let mut engine = LottoEngine::new(LottoConfig::default()).unwrap();
/// engine.purchase(5_000).unwrap();
/// let result = engine.submit_answer(&[1, 2, 3, 4, 5, 6], 7).unwrap();
/// assert_eq!(result.total_spent, 5_000);
/// ```
#[derive(Debug)]
pub struct LottoEngine<S = RngSource> {
    config: LottoConfig,
    generator: TicketGenerator<S>,
    book: TicketBook,
    state: RoundState,
}

impl LottoEngine<RngSource> {
    /// Motor con el RNG del hilo actual.
    pub fn new(config: LottoConfig) -> std::result::Result<Self, ConfigError> {
        Self::with_source(config, RngSource::from_thread_rng())
    }
}

impl<S: RandomNumberSource> LottoEngine<S> {
    pub fn with_source(config: LottoConfig, source: S) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            generator: TicketGenerator::new(source, config.max_number),
            book: TicketBook::new(config.ticket_price, config.max_tickets_per_purchase),
            state: RoundState::NoAnswer,
            config,
        })
    }

    pub fn config(&self) -> &LottoConfig {
        &self.config
    }

    pub fn book(&self) -> &TicketBook {
        &self.book
    }

    pub fn tickets(&self) -> &[Ticket] {
        self.book.tickets()
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn answer(&self) -> Option<&Answer> {
        match &self.state {
            RoundState::AnswerAccepted(answer) => Some(answer),
            RoundState::NoAnswer => None,
        }
    }

    /// Compra automática por monto.
    pub fn purchase(&mut self, amount_spent: u64) -> Result<&[Ticket]> {
        self.book.purchase(amount_spent, &mut self.generator)
    }

    /// Compra manual de un boleto.
    pub fn purchase_manual(&mut self, numbers: &[LottoNumber]) -> Result<&Ticket> {
        self.book.purchase_manual(numbers, self.config.max_number)
    }

    /// Valida una combinación ganadora sin guardarla.
    pub fn validate(&self, base: &[LottoNumber], bonus: LottoNumber) -> Result<Answer> {
        answer::validate(base, bonus, self.config.max_number)
    }

    /// Resultado de los boletos actuales contra `answer`.
    pub fn calc_benefit(&self, answer: &Answer) -> Result<RankResult> {
        benefit::calc_benefit(
            self.book.tickets(),
            answer,
            self.config.ticket_price,
            &self.config.payouts,
        )
    }

    /// Valida, calcula y recién entonces guarda la respuesta de la ronda.
    /// Si algo falla, el estado no cambia.
    pub fn submit_answer(&mut self, base: &[LottoNumber], bonus: LottoNumber) -> Result<RankResult> {
        if let RoundState::AnswerAccepted(_) = self.state {
            return Err(LottoError::AnswerAlreadyAccepted);
        }
        let answer = self.validate(base, bonus)?;
        let result = self.calc_benefit(&answer)?;
        self.state = RoundState::AnswerAccepted(answer);
        Ok(result)
    }

    /// Recalcula el resultado con la respuesta guardada, si la hay.
    pub fn result(&self) -> Option<Result<RankResult>> {
        self.answer().map(|answer| self.calc_benefit(answer))
    }

    /// Vacía los boletos y olvida la respuesta. Se puede llamar varias veces.
    pub fn reset(&mut self) {
        self.book.reset();
        self.state = RoundState::NoAnswer;
    }
}
