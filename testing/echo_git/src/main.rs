use std::env;

// Stands in for git: reports the invocation on stdout as a JSON object.
fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cwd = env::current_dir()?;
    let prompt = env::var("GIT_TERMINAL_PROMPT").unwrap_or_default();
    eprintln!("echo_git: {} argument(s)", args.len());
    print!("{{");
    print!(r#""args":{args:?},"#);
    print!(r#""cwd":{:?},"#, cwd.display().to_string());
    print!(r#""prompt":{prompt:?}"#);
    println!("}}");
    Ok(())
}
