//! Adapter pattern: legacy media decks behind one player interface, a
//! default-method interface adapter, and a bidirectional socket adapter.
//!
//! Run with: cargo run --bin p3_adapter_media

use colored::Colorize;
use pluggable_behaviors::adapter::{
    AdvancedPlayer, CustomDeck, EuroOutlet, EuroSocket, MediaPlayer, Mp3Compat, Mp3Deck, Playback,
    PowerFeed, SocketAdapter, UniversalPlayer, UsOutlet, UsSocket,
};

fn main() {
    println!("{}", "=== Single-Deck Adapter ===".bold());
    let player = Mp3Compat::new(Mp3Deck);
    play(&player, "mp3", "song.mp3");
    play(&player, "mp4", "video.mp4");

    println!("\n{}", "=== Universal Player ===".bold());
    let player = UniversalPlayer::new();
    play(&player, "mp3", "music.mp3");
    play(&player, "MP4", "movie.mp4");
    play(&player, "vlc", "documentary.vlc");
    play(&player, "avi", "old_movie.avi");

    println!("\n{}", "=== Interface Adapter (defaults) ===".bold());
    let deck = CustomDeck;
    show(deck.play_mp3("custom_song.mp3"));
    show(deck.play_mp4("custom_video.mp4"));
    show(deck.play_vlc("custom_documentary.vlc"));
    show(deck.play_avi("custom_movie.avi"));

    println!("\n{}", "=== Bidirectional Socket Adapter ===".bold());
    println!("--- European device on a US outlet ---");
    let adapter = SocketAdapter::BoundToUs(UsOutlet);
    describe(adapter.provide_electricity());

    println!("--- US device on a European outlet ---");
    let adapter = SocketAdapter::BoundToEuro(EuroOutlet);
    describe(adapter.supply_power());

    println!("--- native draw, no conversion ---");
    describe(adapter.provide_electricity());
}

fn play(player: &dyn MediaPlayer, format: &str, file: &str) {
    match player.play(format, file) {
        Ok(output) => println!("{}", output),
        Err(err) => println!("{}", err.to_string().red()),
    }
}

fn show(playback: Playback) {
    match playback {
        Playback::Played { format, file } => println!("custom deck plays {}: {}", format, file),
        Playback::Unsupported { format } => {
            println!("{}", format!("custom deck declines {}", format).yellow())
        }
    }
}

fn describe(feed: PowerFeed) {
    match feed.converted_from {
        Some(native) => println!(
            "{} V {:?} feed {}",
            feed.volts,
            feed.standard,
            format!("(converted from {:?})", native).cyan()
        ),
        None => println!("{} V {:?} feed (native)", feed.volts, feed.standard),
    }
}
