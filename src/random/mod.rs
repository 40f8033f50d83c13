use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

use crate::lotto::config::LottoNumber;
use crate::lotto::error::{LottoError, Result};

/// Fuente de números aleatorios distintos. Es la única parte no determinista
/// del motor; en pruebas se reemplaza por una fuente con semilla o guionada.
pub trait RandomNumberSource {
    /// Saca `count` enteros distintos de `[min, max]`, en orden de sorteo.
    ///
    /// Falla con [`LottoError::Range`] si el rango no tiene `count` valores.
    fn draw_unique(
        &mut self,
        count: usize,
        min: LottoNumber,
        max: LottoNumber,
    ) -> Result<Vec<LottoNumber>>;
}

/// Cantidad de valores en `[min, max]`, o el error si no alcanza para `count`.
pub fn range_len(count: usize, min: LottoNumber, max: LottoNumber) -> Result<usize> {
    let len = if min > max { 0 } else { (max - min) as usize + 1 };
    if count > len {
        return Err(LottoError::Range { count, min, max });
    }
    Ok(len)
}

/// Fuente respaldada por cualquier `rand::Rng`.
///
/// Muestreo sin reemplazo: cada valor del rango tiene la misma probabilidad de
/// salir, y en cualquier posición.
///
/// ```rust
/// use lucky_lotto::random::{RandomNumberSource, RngSource};
///
/// let mut source = RngSource::from_thread_rng();
/// let drawn = source.draw_unique(6, 1, 45).unwrap();
/// assert_eq!(drawn.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng = ThreadRng> {
    rng: R,
}

impl RngSource<ThreadRng> {
    pub fn from_thread_rng() -> Self {
        Self { rng: thread_rng() }
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomNumberSource for RngSource<R> {
    fn draw_unique(
        &mut self,
        count: usize,
        min: LottoNumber,
        max: LottoNumber,
    ) -> Result<Vec<LottoNumber>> {
        let len = range_len(count, min, max)?;
        let picked = rand::seq::index::sample(&mut self.rng, len, count);
        // los índices son < len <= 256, así que min + idx cabe en LottoNumber
        Ok(picked
            .into_iter()
            .map(|idx| min + idx as LottoNumber)
            .collect())
    }
}
