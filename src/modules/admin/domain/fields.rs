/// Editable scalar fields of the personal info screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Email,
    Phone,
    Location,
    GithubUrl,
    Summary,
    ShortTermGoal,
    LongTermGoal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    School,
    Major,
    Period,
    Gpa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkField {
    Label,
    Url,
}
