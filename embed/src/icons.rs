pub const REFRESH: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" height="12px" viewBox="0 0 24 24" fill="none" "#,
    r#"stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" "#,
    r#"style="display:inline-block;margin:0 0 -1px;vertical-align:baseline">"#,
    r#"<polyline points="23 4 23 10 17 10"></polyline><polyline points="1 20 1 14 7 14"></polyline>"#,
    r#"<path d="M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15"></path></svg>"#,
);

pub const EXTERNAL_LINK: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" height="12px" viewBox="0 0 24 24" fill="none" "#,
    r#"stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" "#,
    r#"style="display:inline-block;margin:0 0 -1px 5px;vertical-align:baseline">"#,
    r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"></path>"#,
    r#"<polyline points="15 3 21 3 21 9"></polyline><line x1="10" y1="14" x2="21" y2="3"></line></svg>"#,
);
