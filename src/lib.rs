//! Motor de una simulación de lotería 6/45: compra de boletos, validación de
//! la combinación ganadora, clasificación por rango y rendimiento.

pub mod lotto;
pub mod random;
