use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn save_json<T: Serialize + ?Sized>(data: &T, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(data)?.as_bytes())?;
    info!(path = %path.display(), "wrote json");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::User;

    #[test]
    fn writes_pretty_users() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let users = vec![User::new(1, "Leanne Graham", "Bret", "Sincere@april.biz")];

        save_json(&users, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  {"));
        let back: Vec<User> = serde_json::from_str(&written).unwrap();
        assert_eq!(back, users);
    }
}
