use std::fmt;

use lucky_lotto::lotto::{LottoNumber, TICKET_SIZE};

/// Acciones que el usuario puede pedir desde la terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Purchase(u64),
    PurchaseManual(Vec<LottoNumber>),
    SubmitAnswer { base: Vec<LottoNumber>, bonus: LottoNumber },
    ToggleDetails,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    UnknownCommand(String),
    NotANumber(String),
    WrongCount { expected: usize, got: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "no se ingresó ningún comando"),
            ParseError::UnknownCommand(cmd) => write!(f, "comando desconocido `{cmd}` (probá `help`)"),
            ParseError::NotANumber(token) => write!(f, "`{token}` no es un número válido"),
            ParseError::WrongCount { expected, got } => {
                write!(f, "se esperaban {expected} números, llegaron {got}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
comandos:
  buy <monto>                 compra automática (múltiplos del precio)
  pick n1 n2 n3 n4 n5 n6      compra manual de un boleto
  answer n1,n2,n3,n4,n5,n6 b  combinación ganadora + bonus
  toggle                      mostrar/ocultar números de los boletos
  reset                       empezar una ronda nueva
  quit";

/// Convierte una línea de entrada en una [`Action`].
///
/// Los números se pueden separar con espacios o comas.
pub fn parse(line: &str) -> Result<Action, ParseError> {
    let mut tokens = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());

    let Some(command) = tokens.next() else {
        return Err(ParseError::Empty);
    };
    let args: Vec<&str> = tokens.collect();

    match command.to_lowercase().as_str() {
        "buy" => {
            let [amount] = args.as_slice() else {
                return Err(ParseError::WrongCount { expected: 1, got: args.len() });
            };
            let amount = amount
                .parse::<u64>()
                .map_err(|_| ParseError::NotANumber(amount.to_string()))?;
            Ok(Action::Purchase(amount))
        }
        "pick" => Ok(Action::PurchaseManual(numbers(&args, TICKET_SIZE)?)),
        "answer" => {
            let mut base = numbers(&args, TICKET_SIZE + 1)?;
            // el último número es el bonus
            let bonus = base.pop().unwrap_or_default();
            Ok(Action::SubmitAnswer { base, bonus })
        }
        "toggle" => Ok(Action::ToggleDetails),
        "reset" => Ok(Action::Reset),
        "help" => Ok(Action::Help),
        "quit" | "exit" => Ok(Action::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn numbers(args: &[&str], expected: usize) -> Result<Vec<LottoNumber>, ParseError> {
    if args.len() != expected {
        return Err(ParseError::WrongCount { expected, got: args.len() });
    }
    args.iter()
        .map(|t| t.parse::<LottoNumber>().map_err(|_| ParseError::NotANumber(t.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        assert_eq!(parse("buy 5000"), Ok(Action::Purchase(5000)));
        assert_eq!(
            parse("pick 1 2 3 4 5 6"),
            Ok(Action::PurchaseManual(vec![1, 2, 3, 4, 5, 6]))
        );
        assert_eq!(
            parse("answer 1,2,3,4,5,6 7"),
            Ok(Action::SubmitAnswer { base: vec![1, 2, 3, 4, 5, 6], bonus: 7 })
        );
        assert_eq!(parse("  TOGGLE "), Ok(Action::ToggleDetails));
        assert_eq!(parse("reset"), Ok(Action::Reset));
        assert_eq!(parse("exit"), Ok(Action::Quit));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
        assert_eq!(parse("sell 1"), Err(ParseError::UnknownCommand("sell".into())));
        assert_eq!(parse("buy -1000"), Err(ParseError::NotANumber("-1000".into())));
        assert_eq!(parse("buy"), Err(ParseError::WrongCount { expected: 1, got: 0 }));
        assert_eq!(
            parse("answer 1 2 3 4 5 6"),
            Err(ParseError::WrongCount { expected: 7, got: 6 })
        );
        assert_eq!(parse("pick 1 2 3 4 5 300"), Err(ParseError::NotANumber("300".into())));
    }

    #[test]
    fn parse_errors_read_in_spanish() {
        assert_eq!(
            ParseError::WrongCount { expected: 7, got: 6 }.to_string(),
            "se esperaban 7 números, llegaron 6"
        );
        assert_eq!(
            ParseError::NotANumber("x".into()).to_string(),
            "`x` no es un número válido"
        );
    }
}
