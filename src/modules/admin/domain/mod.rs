mod fields;
mod notice;
mod tab;
mod theme;

pub use fields::{EducationField, LinkField, PersonalField};
pub use notice::{Notice, NoticeBoard, NoticeKind, DEFAULT_NOTICE_TTL};
pub use tab::AdminTab;
pub use theme::AdminTheme;
