mod action;
mod view;

use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use lucky_lotto::lotto::{LottoConfig, LottoEngine};
use lucky_lotto::random::RngSource;

use crate::action::{parse, Action, HELP};
use crate::view::View;

type Engine = LottoEngine<RngSource<StdRng>>;

/// Ejecuta una acción. Devuelve `false` cuando hay que salir.
fn dispatch(engine: &mut Engine, view: &mut View, action: Action) -> bool {
    match action {
        Action::Purchase(amount) => {
            println!("🛒 Comprando boletos por {amount}");
            match engine.purchase(amount) {
                Ok(fresh) => {
                    println!("Compra aceptada: {} boletos nuevos.", fresh.len());
                    print!("{}", view.render_tickets(engine.tickets()));
                }
                Err(err) => println!("{}", view.render_error(&err)),
            }
        }
        Action::PurchaseManual(numbers) => match engine.purchase_manual(&numbers) {
            Ok(ticket) => {
                println!("✍️ Boleto manual: {ticket}");
                print!("{}", view.render_tickets(engine.tickets()));
            }
            Err(err) => println!("{}", view.render_error(&err)),
        },
        Action::SubmitAnswer { base, bonus } => {
            println!("🔎 Revisando resultados");
            match engine.submit_answer(&base, bonus) {
                Ok(result) => print!("{}", view.render_result(&result, engine.config())),
                Err(err) => println!("{}", view.render_error(&err)),
            }
        }
        Action::ToggleDetails => {
            view.toggle_details();
            print!("{}", view.render_tickets(engine.tickets()));
        }
        Action::Reset => {
            engine.reset();
            view.reset();
            println!("🔄 Ronda nueva.");
        }
        Action::Help => println!("{HELP}"),
        Action::Quit => return false,
    }
    true
}

fn main() {
    // semilla opcional para repetir una partida
    let rng = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => StdRng::seed_from_u64(seed),
            Err(_) => {
                eprintln!("semilla inválida: {arg}");
                std::process::exit(2);
            }
        },
        None => StdRng::from_entropy(),
    };

    let config = LottoConfig::default();
    let mut engine = match LottoEngine::with_source(config, RngSource::new(rng)) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("configuración inválida: {err}");
            std::process::exit(2);
        }
    };
    let mut view = View::new();

    println!("=== 🍀 Lotería de la suerte ===");
    println!(
        "Precio por boleto: {} | máximo por compra: {}",
        engine.config().ticket_price,
        engine.config().max_tickets_per_purchase
    );
    println!("{HELP}\n");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("error leyendo la entrada: {err}");
                break;
            }
        }

        match parse(&line) {
            Ok(action) => {
                if !dispatch(&mut engine, &mut view, action) {
                    break;
                }
            }
            Err(action::ParseError::Empty) => {}
            Err(err) => println!("⚠️ {err}"),
        }
    }

    println!("¡Hasta la próxima!");
}
