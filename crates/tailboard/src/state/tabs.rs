/// The four dashboards, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Opportunity,
    Burn,
    Valuation,
    Economics,
}

impl TabId {
    pub const ALL: [TabId; 4] = [
        TabId::Opportunity,
        TabId::Burn,
        TabId::Valuation,
        TabId::Economics,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Opportunity => "Opportunity",
            TabId::Burn => "Cash Burn",
            TabId::Valuation => "Valuation",
            TabId::Economics => "Fleet Economics",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Opportunity => 0,
            TabId::Burn => 1,
            TabId::Valuation => 2,
            TabId::Economics => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<TabId> {
        TabId::ALL.get(index).copied()
    }
}
