use rand::rngs::StdRng;
use rand::SeedableRng;

use lucky_lotto::lotto::{LottoConfig, LottoEngine, LottoError, Rank};
use lucky_lotto::random::RngSource;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("========================================");
    println!("   DEMO: UNA RONDA DE LOTERÍA 6/45");
    println!("========================================\n");

    // Semilla fija: la demo siempre muestra lo mismo
    let mut engine = LottoEngine::with_source(
        LottoConfig::default(),
        RngSource::new(StdRng::seed_from_u64(2024)),
    )?;

    println!("----------------------------------------");
    println!("FASE 1: Compras");
    println!("----------------------------------------");

    let fresh = engine.purchase(8_000)?;
    println!("Compra automática de 8000 → {} boletos", fresh.len());
    for ticket in fresh {
        println!("  🎟️  {ticket}");
    }

    let manual = engine.purchase_manual(&[3, 11, 19, 27, 35, 43])?;
    println!("Compra manual → {manual}");

    // Montos que el motor tiene que rechazar sin tocar los boletos
    for amount in [0, 2_500, 101_000] {
        match engine.purchase(amount) {
            Ok(_) => println!("  {amount}: ¿aceptado? esto no debería pasar"),
            Err(err) => println!("  {amount}: rechazado ({err})"),
        }
    }
    println!("Total: {} boletos, {} gastado\n", engine.tickets().len(), engine.book().total_spent());

    println!("----------------------------------------");
    println!("FASE 2: Combinación ganadora");
    println!("----------------------------------------");

    for (base, bonus) in [
        ([1, 2, 3, 4, 5, 6], 6),
        ([1, 2, 3, 4, 5, 46], 7),
    ] {
        match engine.validate(&base, bonus) {
            Ok(_) => println!("  {base:?} + {bonus}: ¿aceptada? esto no debería pasar"),
            Err(err) => println!("  {base:?} + {bonus}: {err}"),
        }
    }

    let result = engine.submit_answer(&[3, 11, 19, 27, 40, 41], 35)?;
    for rank in Rank::ALL {
        println!("  {rank}: {} boletos", result.count(rank));
    }
    println!("  sin premio: {}", result.unranked);
    println!("  premio total: {} / gastado: {}", result.total_payout, result.total_spent);
    println!("  rendimiento: {:.2}%\n", result.benefit_rate);

    // La lectura es idempotente
    let again = engine.result().ok_or("la respuesta debería estar guardada")??;
    println!("¿Mismo resultado al recalcular? {}", again == result);

    println!("\n----------------------------------------");
    println!("FASE 3: Reset");
    println!("----------------------------------------");

    engine.reset();
    match engine.submit_answer(&[1, 2, 3, 4, 5, 6], 7) {
        Err(LottoError::NoTicketsPurchased) => println!("Sin boletos después del reset ✅"),
        other => println!("inesperado: {other:?}"),
    }

    println!("\nDemo terminada.");
    Ok(())
}
