use roast_core::{AppViewModel, ImpactTier, ResultsView, Screen, SongJob, DEFAULT_SONG_TITLE};

const BAR_COLUMNS: usize = 40;
const RESET: &str = "\x1b[0m";

pub fn render(view: &AppViewModel) {
    match view.screen {
        Screen::Submission => render_submission(view),
        Screen::Results => match &view.results {
            Some(results) => render_results(results),
            None => render_empty_state(),
        },
    }
}

fn render_submission(view: &AppViewModel) {
    println!();
    println!("=== Green Roast ===");
    println!("Discover the environmental impact of your AI prompts and get");
    println!("roasted for your carbon footprint!");
    println!();
    if view.submitting {
        println!("Analyzing your carbon footprint...");
        return;
    }
    if let Some(rejection) = view.rejection {
        println!("! {rejection}");
    }
    let mascot = if view.typing { "Typing..." } else { "Ready!" };
    println!("[tree: {mascot}]");
    println!("Enter your AI prompt (or 'quit'):");
}

fn render_results(results: &ResultsView) {
    let accent = tier_ansi(results.impact.tier);

    println!();
    println!("=== Analysis Results ===");
    println!("{}", results.mood_line);
    if results.demo_fallback {
        println!("(analyze service unreachable; showing a demo result)");
    }
    println!();
    println!("Tokens used:      {}", format_with_commas(u64::from(results.tokens)));
    println!(
        "Carbon footprint: {} g CO2  {accent}[{}]{RESET}",
        results.carbon_cost, results.impact.label
    );
    println!("Efficiency score: {}/100", results.efficiency_score);
    println!();

    let filled = usize::from(results.progress_percent) * BAR_COLUMNS / 100;
    println!(
        "{accent}[{}{}]{RESET} {}%",
        "#".repeat(filled),
        " ".repeat(BAR_COLUMNS - filled),
        results.progress_percent
    );
    println!(" Efficient        Moderate        Wasteful");
    println!();

    println!("The Roast: {}", results.roast);
    if results.roast_count > 1 {
        println!("           ('roast' for the next one)");
    }
    println!();

    render_song(&results.song);

    if let Some(rewrite) = &results.rewrite {
        println!();
        println!("Greener alternative: {}", rewrite.text);
        if let Some(savings) = rewrite.savings {
            println!(
                "                     saves {} tokens ({} g CO2)",
                savings.tokens, savings.carbon_grams
            );
        }
    }

    println!();
    println!("Commands: roast | song | new | quit");
}

fn render_song(song: &SongJob) {
    match song {
        SongJob::Idle => println!("Roast Song: 'song' to generate one"),
        SongJob::Requesting => println!("Roast Song: generating..."),
        SongJob::Streaming(artifact) => {
            println!(
                "Roast Song: {} (streaming...)",
                artifact.title.as_deref().unwrap_or(DEFAULT_SONG_TITLE)
            );
            if let Some(audio_url) = artifact.audio_url.as_deref() {
                println!("            audio: {audio_url}");
            }
            if let Some(image_url) = artifact.image_url.as_deref() {
                println!("            cover: {image_url}");
            }
        }
        SongJob::Complete(artifact) => {
            println!(
                "Roast Song: {} (complete)",
                artifact.title.as_deref().unwrap_or(DEFAULT_SONG_TITLE)
            );
            if let Some(audio_url) = artifact.audio_url.as_deref() {
                println!("            audio: {audio_url}");
            }
            if let Some(image_url) = artifact.image_url.as_deref() {
                println!("            cover: {image_url}");
            }
        }
        SongJob::Failed => {
            println!("Roast Song: generation failed; 'song' to retry");
        }
    }
}

fn render_empty_state() {
    println!();
    println!("=== No Analysis Data ===");
    println!("It looks like there's no analysis data to display.");
    println!("Commands: new | quit");
}

fn tier_ansi(tier: ImpactTier) -> &'static str {
    match tier {
        ImpactTier::Efficient => "\x1b[32m",
        ImpactTier::Moderate => "\x1b[33m",
        ImpactTier::Wasteful => "\x1b[31m",
    }
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
