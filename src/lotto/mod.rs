pub mod answer;
pub mod benefit;
pub mod book;
pub mod config;
pub mod engine;
pub mod error;
pub mod ticket;

pub use answer::{validate, Answer};
pub use benefit::{calc_benefit, classify, Rank, RankResult};
pub use book::TicketBook;
pub use config::{LottoConfig, LottoNumber, PayoutTable, TICKET_SIZE};
pub use engine::{LottoEngine, RoundState};
pub use error::{ConfigError, LottoError, Result};
pub use ticket::{Ticket, TicketGenerator};
