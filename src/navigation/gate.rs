/// Permission for one navigation direction out of a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gate {
    StayOnCurrentScreen,
    #[default]
    MoveToNextScreen,
}

impl Gate {
    pub fn is_open(self) -> bool {
        self == Gate::MoveToNextScreen
    }
}

/// Which way a navigation request goes along the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}
