//! Win/draw/loss values, used to tally game results from the POV of one player.
use std::ops::{Add, AddAssign};

/// The outcome of a game from the POV of a certain player. Usually obtained using [Outcome::pov](crate::board::Outcome::pov).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OutcomeWDL {
    Win,
    Draw,
    Loss,
}

/// A collection of [win, draw, loss] values.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WDL<V> {
    pub win: V,
    pub draw: V,
    pub loss: V,
}

impl OutcomeWDL {
    /// Convert this to a WDL with a one at the correct place and zero otherwise.
    pub fn to_wdl<V: num_traits::One + num_traits::Zero>(self) -> WDL<V> {
        match self {
            OutcomeWDL::Win => WDL::new(V::one(), V::zero(), V::zero()),
            OutcomeWDL::Draw => WDL::new(V::zero(), V::one(), V::zero()),
            OutcomeWDL::Loss => WDL::new(V::zero(), V::zero(), V::one()),
        }
    }
}

impl<V> WDL<V> {
    pub fn new(win: V, draw: V, loss: V) -> Self {
        WDL { win, draw, loss }
    }
}

impl<V: Copy + Add<V, Output = V>> WDL<V> {
    pub fn sum(self) -> V {
        self.win + self.draw + self.loss
    }
}

impl WDL<u32> {
    /// The fraction of games for each of win, draw and loss.
    pub fn rates(self) -> WDL<f32> {
        let total = self.sum().max(1) as f32;
        WDL {
            win: self.win as f32 / total,
            draw: self.draw as f32 / total,
            loss: self.loss as f32 / total,
        }
    }
}

impl<V: Copy + Add<V, Output = V>> Add<WDL<V>> for WDL<V> {
    type Output = WDL<V>;

    fn add(self, rhs: WDL<V>) -> Self::Output {
        WDL {
            win: self.win + rhs.win,
            draw: self.draw + rhs.draw,
            loss: self.loss + rhs.loss,
        }
    }
}

impl<V: Copy + Add<V, Output = V>> AddAssign<WDL<V>> for WDL<V> {
    fn add_assign(&mut self, rhs: WDL<V>) {
        *self = *self + rhs;
    }
}

impl<V: Default + Copy + Add<Output = V>> std::iter::Sum for WDL<V> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, v| a + v)
    }
}
