use anyhow::{anyhow, bail, Context, Result};
use bumpalo::Bump;
use regex::Regex;
use rust_lists::{
    around::{log_around, TracingLogger},
    fizzbuzz::fizz_buzz_range,
    linkedlist::OrderedList,
    powers::Powers,
    words::Words,
};
use std::{env, fs::File, io::Read, process};
use tracing::{debug, info};

/*
 * One line of a script
 */
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Push(Vec<&'a str>),
    Pop,
    Contains(&'a str),
    Size,
    Print,
    Powers(u64, u32),
    FizzBuzz(i64, i64),
    Words(Words),
    Letters(Words),
}

struct Script<'a> {
    commands: Vec<Command<'a>>,
}

impl<'a> Script<'a> {
    /*
     * Parse a script from input.
     * Every non blank line is <command> [args...], lines starting with # are skipped.
     *
     * <bump> is the arena all values are interned in, so that the list can
     * borrow them for the whole run.
     */
    fn parse(input: &str, bump: &'a Bump) -> Result<Self> {
        let mut res = Script { commands: vec![] };

        let re = Regex::new(r"^\s*([a-z]+)(?:\s+(.*?))?\s*$")?;
        for (n, l) in input.lines().enumerate() {
            let trimmed = l.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let command = re
                .captures(l)
                .ok_or(anyhow!("Failed to parse line {} : {}", n + 1, l))
                .and_then(|captures| {
                    let name = captures.get(1).map_or("", |m| m.as_str());
                    let rest = captures.get(2).map_or("", |m| m.as_str());
                    Self::command(name, rest, bump)
                })
                .with_context(|| format!("Invalid command at line {} : {}", n + 1, l))?;
            res.commands.push(command);
        }

        Ok(res)
    }

    fn command(name: &str, rest: &str, bump: &'a Bump) -> Result<Command<'a>> {
        let args: Vec<&str> = rest.split_whitespace().collect();
        let expect_args = |count: usize| {
            if args.len() != count {
                bail!("{} takes {} argument(s), got {}", name, count, args.len());
            }
            Ok(())
        };

        let command = match name {
            "push" => {
                if args.is_empty() {
                    bail!("push needs at least one value");
                }
                // Intern values so they live as long as the arena
                Command::Push(args.iter().map(|arg| &*bump.alloc_str(arg)).collect())
            }
            "pop" => {
                expect_args(0)?;
                Command::Pop
            }
            "contains" => {
                expect_args(1)?;
                Command::Contains(bump.alloc_str(args[0]))
            }
            "size" => {
                expect_args(0)?;
                Command::Size
            }
            "print" => {
                expect_args(0)?;
                Command::Print
            }
            "powers" => {
                expect_args(2)?;
                Command::Powers(args[0].parse()?, args[1].parse()?)
            }
            "fizzbuzz" => {
                expect_args(2)?;
                Command::FizzBuzz(args[0].parse()?, args[1].parse()?)
            }
            "words" => Command::Words(Words::parse(rest)?),
            "letters" => Command::Letters(Words::parse(rest)?),
            _ => bail!("Unknown command {}", name),
        };
        Ok(command)
    }

    /*
     * Apply every command to <list>, returning one output line per command that prints
     */
    fn run(&self, list: &mut OrderedList<&'a str>) -> Vec<String> {
        let mut out = vec![];
        for command in &self.commands {
            debug!(?command, size = list.len(), "Running command");
            match command {
                Command::Push(values) => {
                    for value in values {
                        list.push_front(*value);
                    }
                }
                Command::Pop => out.push(
                    list.pop_front()
                        .map_or("(empty)".to_string(), str::to_string),
                ),
                Command::Contains(value) => out.push(
                    list.contains(value)
                        .map_or("(none)".to_string(), |found| found.to_string()),
                ),
                Command::Size => out.push(list.len().to_string()),
                Command::Print => out.push(list.to_string()),
                Command::Powers(base, limit) => out.push(join(Powers::new(*base, *limit))),
                Command::FizzBuzz(from, to) => out.push(join(fizz_buzz_range(*from, *to))),
                Command::Words(words) => out.push(join(words.iter())),
                Command::Letters(words) => out.push(join(words.letters())),
            }
        }
        out
    }
}

fn join<T: ToString>(values: impl Iterator<Item = T>) -> String {
    values
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn read_input(path: &str) -> Result<String> {
    let mut f = File::open(path).context("Failed to open file")?;
    let mut input = String::new();
    f.read_to_string(&mut input)
        .context("Failed to read file")?;
    Ok(input)
}

/*
 * Logs go to stderr, filtered by RUST_LOG (info by default)
 */
fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    setup_tracing();

    if env::args().len() != 2 {
        println!(
            "Usage : {} [script file]",
            env::args().next().unwrap_or_else(|| "rust-lists".to_string())
        );
        process::exit(1);
    }
    let path = env::args().nth(1).ok_or(anyhow!("Missing script file"))?;
    let input = read_input(&path)?;

    let bump = Bump::new();
    let mut list = OrderedList::new();
    let out = log_around(&TracingLogger, &format!("script {}", path), || {
        let script = Script::parse(&input, &bump).context("Failed to parse script")?;
        info!(commands = script.commands.len(), "Parsed script");
        Ok::<_, anyhow::Error>(script.run(&mut list))
    })?;

    for line in out {
        println!("{}", line);
    }
    info!(size = list.len(), "Final list : [{}]", list);

    Ok(())
}
