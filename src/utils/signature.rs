pub fn get_signature(version: &str) -> String {
    format!(
        r#"
  ___ ___  ___ ___
 | . | . || . | . |     ⚒️  Buildbump (build number bumper for project.godot)
 |___|___||___|___|
   |   |    |   |       Increments the fourth segment of config/version
  [1] [2]  [3] [+1]
                        v{}
"#,
        version
    )
}
