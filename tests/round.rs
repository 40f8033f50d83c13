use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;

use lucky_lotto::lotto::{LottoConfig, LottoEngine, LottoError, LottoNumber, Rank, RoundState};
use lucky_lotto::random::{range_len, RandomNumberSource, RngSource};

/// Fuente que entrega boletos predefinidos, en orden.
struct ScriptedSource {
    draws: VecDeque<Vec<LottoNumber>>,
}

impl ScriptedSource {
    fn new(draws: &[[LottoNumber; 6]]) -> Self {
        Self { draws: draws.iter().map(|d| d.to_vec()).collect() }
    }
}

impl RandomNumberSource for ScriptedSource {
    fn draw_unique(
        &mut self,
        count: usize,
        min: LottoNumber,
        max: LottoNumber,
    ) -> lucky_lotto::lotto::Result<Vec<LottoNumber>> {
        range_len(count, min, max)?;
        let draw = self.draws.pop_front().expect("script ran out of draws");
        assert_eq!(draw.len(), count);
        Ok(draw)
    }
}

fn scripted(draws: &[[LottoNumber; 6]]) -> LottoEngine<ScriptedSource> {
    LottoEngine::with_source(LottoConfig::default(), ScriptedSource::new(draws)).unwrap()
}

#[test]
fn ranks_a_known_book() {
    let mut engine = scripted(&[
        [1, 2, 3, 4, 5, 6],       // 1º
        [7, 1, 2, 3, 4, 5],       // 2º
        [1, 2, 3, 4, 5, 8],       // 3º
        [1, 2, 3, 4, 44, 45],     // 4º
        [1, 2, 3, 43, 44, 45],    // 5º
        [1, 2, 7, 43, 44, 45],    // nada: 2 aciertos + bonus
    ]);
    engine.purchase(6_000).unwrap();

    let result = engine.submit_answer(&[6, 5, 4, 3, 2, 1], 7).unwrap();

    for rank in Rank::ALL {
        assert_eq!(result.count(rank), 1, "{rank}");
    }
    assert_eq!(result.unranked, 1);
    assert_eq!(
        result.total_payout,
        2_000_000_000 + 30_000_000 + 1_500_000 + 50_000 + 5_000
    );
    assert_eq!(result.total_spent, 6_000);
    assert_eq!(result.benefit_rate, 33_859_250.0);
}

#[test]
fn tickets_keep_generation_order() {
    let mut engine = scripted(&[[45, 44, 43, 42, 41, 40], [10, 20, 30, 1, 2, 3]]);
    engine.purchase(2_000).unwrap();

    let shown: Vec<String> = engine.tickets().iter().map(|t| t.to_string()).collect();
    assert_eq!(shown, ["40, 41, 42, 43, 44, 45", "1, 2, 3, 10, 20, 30"]);
}

#[test]
fn book_grows_monotonically() {
    let mut engine =
        LottoEngine::with_source(LottoConfig::default(), RngSource::new(StdRng::seed_from_u64(77)))
            .unwrap();

    let mut expected = 0;
    for k in [1u64, 5, 100, 3] {
        let fresh = engine.purchase(k * 1_000).unwrap().len();
        assert_eq!(fresh as u64, k);
        expected += k as usize;
        assert_eq!(engine.tickets().len(), expected);
    }
}

#[test]
fn failed_purchase_changes_nothing() {
    let mut engine =
        LottoEngine::with_source(LottoConfig::default(), RngSource::new(StdRng::seed_from_u64(3)))
            .unwrap();
    engine.purchase(4_000).unwrap();
    let before = engine.tickets().to_vec();

    assert_eq!(
        engine.purchase(4_500),
        Err(LottoError::InvalidAmount { amount: 4_500, ticket_price: 1_000 })
    );
    assert_eq!(
        engine.purchase(200_000),
        Err(LottoError::PurchaseLimitExceeded { requested: 200, limit: 100 })
    );
    assert_eq!(engine.tickets(), &before[..]);
}

#[test]
fn calc_benefit_is_idempotent() {
    let mut engine =
        LottoEngine::with_source(LottoConfig::default(), RngSource::new(StdRng::seed_from_u64(12)))
            .unwrap();
    engine.purchase(50_000).unwrap();

    let answer = engine.validate(&[8, 13, 21, 34, 1, 2], 3).unwrap();
    let first = engine.calc_benefit(&answer).unwrap();
    let second = engine.calc_benefit(&answer).unwrap();
    assert_eq!(first, second);

    let submitted = engine.submit_answer(&[8, 13, 21, 34, 1, 2], 3).unwrap();
    assert_eq!(submitted, first);
    assert_eq!(engine.result(), Some(Ok(first)));
}

#[test]
fn reset_leaves_no_residue() {
    let mut engine = scripted(&[
        [1, 2, 3, 4, 5, 6],
        [1, 2, 3, 4, 5, 6],
        [40, 41, 42, 43, 44, 45],
    ]);
    engine.purchase(2_000).unwrap();
    engine.submit_answer(&[1, 2, 3, 4, 5, 6], 7).unwrap();

    engine.reset();
    assert_eq!(engine.state(), RoundState::NoAnswer);
    let answer = engine.validate(&[1, 2, 3, 4, 5, 6], 7).unwrap();
    assert_eq!(engine.calc_benefit(&answer), Err(LottoError::NoTicketsPurchased));

    engine.purchase(1_000).unwrap();
    let result = engine.submit_answer(&[1, 2, 3, 4, 5, 6], 7).unwrap();
    assert_eq!(result.count(Rank::First), 0);
    assert_eq!(result.unranked, 1);
    assert_eq!(result.total_spent, 1_000);
    assert_eq!(result.benefit_rate, 0.0);
}

#[test]
fn custom_config_changes_the_rules() {
    let config = LottoConfig::default()
        .with_max_number(10)
        .with_ticket_price(500)
        .with_max_tickets_per_purchase(4);
    let mut engine =
        LottoEngine::with_source(config, RngSource::new(StdRng::seed_from_u64(8))).unwrap();

    assert_eq!(engine.purchase(2_000).unwrap().len(), 4);
    assert!(engine.tickets().iter().all(|t| t.numbers().iter().all(|&n| n <= 10)));
    assert_eq!(
        engine.purchase(2_500),
        Err(LottoError::PurchaseLimitExceeded { requested: 5, limit: 4 })
    );
    assert_eq!(
        engine.validate(&[1, 2, 3, 4, 5, 6], 11),
        Err(LottoError::OutOfRange { number: 11, max: 10 })
    );
}
