pub mod daily_frame;
pub mod yearly_frame;
