pub type Channel  = u8;
pub type Pitch    = u8;
pub type Velocity = u8;
pub type Program  = u8;
