use crate::cli::opts::*;
use crate::cli::prompt::{stdio, Prompter};
use crate::cli::session::{ReviewMode, Session, SkipToggle};

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use leetanki_core::{
    due_today, format_solution, has_tag, matches_text, normalize_difficulty, normalize_tag,
    parse_index_list, parse_tag_list, pick_bored, resolve_bored_tag, review_session,
    set_skip_all, set_skip_by_indices, set_skip_by_tag, summarize, validate_statement,
    CoreError, Problem, ProblemStore, SessionFilter, UNRATED,
};
use leetanki_json::paths::store_paths;
use leetanki_json::JsonStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};

/// Built-in bored-mode tag; empty means any tag.
pub const DEFAULT_BORED_TAG: &str = "";
pub const BORED_TAG_ENV: &str = "BORED_TAG";

/// Values resolved once per invocation.
#[derive(Debug, Clone)]
pub struct Context {
    pub today: NaiveDate,
    pub bored_env_tag: Option<String>,
}

pub fn run_cli(args: Cli) -> Result<()> {
    let store = open_store(&args)?;
    let ctx = Context {
        today: Local::now().date_naive(),
        bored_env_tag: std::env::var(BORED_TAG_ENV).ok(),
    };
    let mut io = stdio();
    dispatch(&store, &mut io, args.cmd, &ctx)
}

pub fn open_store(args: &Cli) -> Result<JsonStore> {
    let (file, backups) = store_paths(args.file.as_deref());
    let store = JsonStore::open(file, backups, args.max_backups)?;
    tracing::debug!(path = %store.path().display(), "using problem file");
    Ok(store)
}

pub fn dispatch<R: BufRead, W: Write>(
    store: &dyn ProblemStore,
    io: &mut Prompter<R, W>,
    cmd: Command,
    ctx: &Context,
) -> Result<()> {
    match cmd {
        Command::Add(a) => add_cmd(store, io, a),
        Command::List(l) => list_cmd(store, io, l),
        Command::Show { number } => show_cmd(store, io, number),
        Command::Rm { number } => {
            let removed = store.delete_problem(number)?;
            io.say(format!("deleted: {}", removed.title))?;
            Ok(())
        }
        Command::Edit(e) => edit_cmd(store, io, e),
        Command::Review(r) => review_cmd(store, io, r, ctx),
        Command::Daily(d) => daily_cmd(store, io, d, ctx),
        Command::Bored(b) => bored_cmd(store, io, b, ctx),
        Command::Stats => stats_cmd(store, io, ctx),
        Command::Skip(s) => skip_cmd(store, io, s),
    }
}

fn add_cmd<R: BufRead, W: Write>(store: &dyn ProblemStore, io: &mut Prompter<R, W>, a: AddArgs) -> Result<()> {
    // Fully interactive unless a title came in on the command line.
    let interactive = a.title.is_none();
    let title = match a.title {
        Some(t) => t,
        None => io.ask("Enter problem title: ")?,
    };
    let title = title.trim().to_string();
    if title.is_empty() {
        bail!("title must not be empty");
    }
    let tags = match a.tags {
        Some(t) => t,
        None if interactive => io.ask("Enter tags (comma separated): ")?,
        None => String::new(),
    };
    let statement = match a.statement {
        Some(s) => s,
        None => io.read_block("Enter problem statement (end with a single line containing only 'END'):")?,
    };
    validate_statement(&statement)?;
    let solution = match a.solution {
        Some(s) => s,
        None => io.read_block("Enter solution code (end with a single line containing only 'END'):")?,
    };
    let notes = match a.notes {
        Some(n) => n,
        None if interactive => io.ask("Enter any notes for this problem (optional): ")?,
        None => String::new(),
    };
    let difficulty = match a.difficulty {
        Some(d) => d,
        None if interactive => io.ask("Enter difficulty (Easy/Medium/Hard): ")?,
        None => String::new(),
    };

    let mut p = Problem::new(title, statement, format_solution(&solution));
    p.tags = parse_tag_list(&tags);
    p.notes = notes.trim().to_string();
    p.difficulty = normalize_difficulty(&difficulty, UNRATED);
    let number = store.add_problem(p)?;
    io.say(format!("Problem #{number} added."))?;
    Ok(())
}

fn list_cmd<R: BufRead, W: Write>(store: &dyn ProblemStore, io: &mut Prompter<R, W>, l: ListArgs) -> Result<()> {
    let all = store.load_all()?;
    let tag = l.tag.unwrap_or_default();
    let query = l.search.unwrap_or_default();
    let mut shown = 0;
    for (i, p) in all.iter().enumerate() {
        if !has_tag(p, &tag) || !matches_text(p, &query) {
            continue;
        }
        shown += 1;
        let next = p.next_review.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string());
        io.say(format!(
            "{:>3}. [{}] {} (tags: {}) [{}] next: {}",
            i + 1,
            if p.skip_recall { 'X' } else { ' ' },
            p.title,
            p.tags.join(", "),
            p.difficulty,
            next
        ))?;
    }
    if shown == 0 {
        io.say("No problems.")?;
    }
    Ok(())
}

fn show_cmd<R: BufRead, W: Write>(store: &dyn ProblemStore, io: &mut Prompter<R, W>, number: usize) -> Result<()> {
    let p = store.get_problem(number)?;
    let date = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string());
    io.say(format!("#{number} {}", p.title))?;
    io.say(format!("Tags: {} | Difficulty: {}", p.tags.join(", "), p.difficulty))?;
    io.say(format!(
        "Reviews: {} ({} correct) | ef: {:.2} | interval: {} | last: {} | next: {} | skip recall: {}",
        p.review_count,
        p.success_count,
        p.ef,
        p.interval,
        date(p.last_reviewed),
        date(p.next_review),
        p.skip_recall
    ))?;
    io.say("\nStatement:")?;
    io.say(&p.statement)?;
    io.say("\nSolution:")?;
    io.say(&p.solution)?;
    if !p.notes.is_empty() {
        io.say(format!("\nNotes: {}", p.notes))?;
    }
    Ok(())
}

fn edit_cmd<R: BufRead, W: Write>(store: &dyn ProblemStore, io: &mut Prompter<R, W>, e: EditArgs) -> Result<()> {
    if e.skip && e.unskip {
        bail!("cannot use --skip and --unskip together");
    }
    let updated = store.update_problem(e.number, &mut |p: &mut Problem| -> Result<(), CoreError> {
        if let Some(t) = &e.title {
            p.title = t.trim().to_string();
        }
        if let Some(s) = &e.statement {
            validate_statement(s)?;
            p.statement = s.clone();
        }
        if let Some(s) = &e.solution {
            p.solution = format_solution(s);
        }
        if let Some(n) = &e.notes {
            p.notes = n.trim().to_string();
        }
        if let Some(d) = &e.difficulty {
            p.difficulty = normalize_difficulty(d, UNRATED);
        }
        for t in &e.add_tags {
            let norm = normalize_tag(t);
            if !p.tags.iter().any(|x| normalize_tag(x) == norm) {
                p.tags.push(t.trim().to_string());
            }
        }
        if !e.rm_tags.is_empty() {
            let rm: Vec<String> = e.rm_tags.iter().map(|t| normalize_tag(t)).collect();
            p.tags.retain(|x| !rm.contains(&normalize_tag(x)));
        }
        if e.skip {
            p.skip_recall = true;
        } else if e.unskip {
            p.skip_recall = false;
        }
        Ok(())
    })?;
    io.say(format!("updated: {}", updated.title))?;
    Ok(())
}

fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

fn review_cmd<R: BufRead, W: Write>(
    store: &dyn ProblemStore,
    io: &mut Prompter<R, W>,
    r: ReviewArgs,
    ctx: &Context,
) -> Result<()> {
    let mut problems = store.load_all()?;
    let filter = SessionFilter {
        tag: r.tag,
        difficulty: r.difficulty,
        status: r.status,
    };
    let mut rng = session_rng(r.seed);
    let picked = review_session(&mut problems, &filter, ctx.today, &mut rng);
    if picked.is_empty() {
        io.say("No problems match the selected filters.")?;
        return Ok(());
    }
    let result = Session {
        io: &mut *io,
        today: ctx.today,
        mode: r.mode,
        toggle: SkipToggle::BeforeReveal,
    }
    .run(picked);
    // persist whatever got reviewed, even if input ran out midway
    store.save_all(&problems)?;
    let reviewed = result?;
    io.say(format!("\nReviewed {reviewed} problem(s)."))?;
    Ok(())
}

fn daily_cmd<R: BufRead, W: Write>(
    store: &dyn ProblemStore,
    io: &mut Prompter<R, W>,
    d: DailyArgs,
    ctx: &Context,
) -> Result<()> {
    let mut problems = store.load_all()?;
    let due = due_today(&mut problems, ctx.today);
    if due.is_empty() {
        io.say("No problems scheduled for review today!")?;
        return Ok(());
    }
    io.say(format!("{} problem(s) scheduled for today.", due.len()))?;
    let result = Session {
        io: &mut *io,
        today: ctx.today,
        mode: d.mode,
        toggle: SkipToggle::Never,
    }
    .run(due);
    store.save_all(&problems)?;
    result?;
    Ok(())
}

fn bored_cmd<R: BufRead, W: Write>(
    store: &dyn ProblemStore,
    io: &mut Prompter<R, W>,
    b: BoredArgs,
    ctx: &Context,
) -> Result<()> {
    let tag = resolve_bored_tag(b.tag.as_deref(), ctx.bored_env_tag.as_deref(), DEFAULT_BORED_TAG);
    let mut problems = store.load_all()?;
    let mut rng = session_rng(b.seed);
    let Some(pick) = pick_bored(&mut problems, &tag, &mut rng) else {
        io.say("No problems available to select for bored mode.")?;
        return Ok(());
    };
    if pick.tag_fallback {
        io.say(format!(
            "No problems found for the configured bored tag: '{tag}'. Trying any tag instead."
        ))?;
    }
    let heading = format!("Random Problem: {}", pick.problem.title);
    let result = Session {
        io: &mut *io,
        today: ctx.today,
        mode: ReviewMode::Recall,
        toggle: SkipToggle::AfterReview,
    }
    .review(pick.problem, &heading);
    store.save_all(&problems)?;
    result?;
    Ok(())
}

fn stats_cmd<R: BufRead, W: Write>(store: &dyn ProblemStore, io: &mut Prompter<R, W>, ctx: &Context) -> Result<()> {
    let problems = store.load_all()?;
    let s = summarize(&problems, ctx.today);
    io.say(format!("Total problems: {}", s.total))?;
    io.say("Problems by difficulty:")?;
    for (diff, count) in &s.by_difficulty {
        io.say(format!("  {diff}: {count}"))?;
    }
    io.say("Problems by tag:")?;
    for (tag, count) in &s.by_tag {
        io.say(format!("  {tag}: {count}"))?;
    }
    io.say(format!("Skipped for recall: {}", s.skipped))?;
    io.say(format!("Due now: {} | Reviewed today: {}", s.due, s.reviewed_today))?;
    io.say(format!(
        "Reviews: {} | Correct: {} ({:.0}%)",
        s.totals.reviews,
        s.totals.successes,
        s.totals.success_rate() * 100.0
    ))?;
    Ok(())
}

enum SkipSelection {
    Indices(String),
    Tag(String),
    All,
}

fn skip_cmd<R: BufRead, W: Write>(store: &dyn ProblemStore, io: &mut Prompter<R, W>, s: SkipArgs) -> Result<()> {
    let mut problems = store.load_all()?;

    let mut selections = Vec::new();
    if let Some(i) = s.indices {
        selections.push(SkipSelection::Indices(i));
    }
    if let Some(t) = s.tag {
        selections.push(SkipSelection::Tag(t));
    }
    if s.all {
        selections.push(SkipSelection::All);
    }

    let action = if selections.is_empty() {
        io.say("Batch Skip Recall Manager - interactive")?;
        io.say("List of problems:")?;
        for (i, p) in problems.iter().enumerate() {
            io.say(format!(
                "{}. [{}] {} (tags: {})",
                i + 1,
                if p.skip_recall { 'X' } else { ' ' },
                p.title,
                p.tags.join(", ")
            ))?;
        }
        let spec = io.ask("Enter indices (comma/range), 'tag:<tag>', 'all' or leave blank to cancel: ")?;
        let spec = spec.trim();
        if spec.is_empty() {
            io.say("Cancelled.")?;
            return Ok(());
        }
        if spec.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("tag:")) {
            selections.push(SkipSelection::Tag(spec[4..].trim().to_string()));
        } else if spec.eq_ignore_ascii_case("all") {
            selections.push(SkipSelection::All);
        } else {
            selections.push(SkipSelection::Indices(spec.to_string()));
        }
        match s.action {
            Some(a) => a,
            None => match io.ask("Action (mark/unmark): ")?.trim().to_lowercase().as_str() {
                "mark" => SkipAction::Mark,
                "unmark" => SkipAction::Unmark,
                other => bail!("invalid action: {other}"),
            },
        }
    } else {
        match s.action {
            Some(a) => a,
            None => bail!("--action is required with --indices/--tag/--all; use --action mark|unmark"),
        }
    };
    let set_to = action.as_flag();

    // Validate every selector before touching anything.
    let mut parsed = Vec::new();
    for sel in &selections {
        match sel {
            SkipSelection::Indices(spec) => parsed.push(parse_index_list(spec, problems.len())?),
            SkipSelection::Tag(tag) if normalize_tag(tag).is_empty() => {
                bail!("tag {tag:?} has no letters or digits")
            }
            _ => {}
        }
    }

    let mut parsed = parsed.into_iter();
    let mut total = 0;
    for sel in selections {
        let changed = match sel {
            SkipSelection::Indices(_) => {
                let indices = parsed.next().unwrap_or_default();
                let n = set_skip_by_indices(&mut problems, indices, set_to);
                io.say(format!("Updated {n} problems by indices"))?;
                n
            }
            SkipSelection::Tag(tag) => {
                let n = set_skip_by_tag(&mut problems, &tag, set_to)?;
                io.say(format!("Updated {n} problems by tag '{tag}'"))?;
                n
            }
            SkipSelection::All => {
                let n = set_skip_all(&mut problems, set_to);
                io.say(format!("Updated {n} problems (all)"))?;
                n
            }
        };
        total += changed;
    }

    if total == 0 {
        io.say("No changes made.")?;
    } else {
        store.save_all(&problems)?;
        io.say(format!("Total updated: {total}"))?;
    }
    Ok(())
}
