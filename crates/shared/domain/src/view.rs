use bitflags::bitflags;

bitflags! {
    /// Operations a pull-request view controller can perform on request of an action.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct ViewOperations: u8 {
        const REFRESH = 1 << 0;
        const NAVIGATE = 1 << 1;
        const CLOSE = 1 << 2;

        const ALL = Self::REFRESH.bits() | Self::NAVIGATE.bits() | Self::CLOSE.bits();
    }
}
