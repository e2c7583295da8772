use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Profile {
    pub id: String,
    pub bride_name: Option<String>,
    pub groom_name: Option<String>,
    pub updated_at: Option<String>,
}

impl Profile {
    /// "Anna & Marco", falling back to "Bride" / "Groom" for missing names.
    pub fn couple(&self) -> String {
        let bride = non_blank(self.bride_name.as_deref()).unwrap_or("Bride");
        let groom = non_blank(self.groom_name.as_deref()).unwrap_or("Groom");
        format!("{bride} & {groom}")
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}
