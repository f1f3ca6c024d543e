// Adapters between incompatible capability shapes.
// Every adapter here holds an owned instance of the legacy implementation and
// delegates to it; none relies on inheritance-style reuse.

use crate::error::BehaviorError;

// ============================================================================
// Media decks behind one player interface
// ============================================================================

/// The interface client code expects.
pub trait MediaPlayer {
    fn play(&self, format: &str, file: &str) -> Result<String, BehaviorError>;
}

// Legacy decks with incompatible native shapes.

pub struct Mp3Deck;

impl Mp3Deck {
    pub fn play_mp3(&self, file: &str) -> String {
        format!("playing mp3 file: {}", file)
    }
}

pub struct Mp4Deck;

impl Mp4Deck {
    pub fn play_mp4(&self, file: &str) -> String {
        format!("playing mp4 file: {}", file)
    }
}

pub struct VlcDeck;

impl VlcDeck {
    pub fn play_vlc(&self, file: &str) -> String {
        format!("playing vlc file: {}", file)
    }
}

/// Adapter around a single deck: only "mp3" (case-insensitive) is playable.
pub struct Mp3Compat {
    deck: Mp3Deck,
}

impl Mp3Compat {
    pub fn new(deck: Mp3Deck) -> Self {
        Self { deck }
    }
}

impl MediaPlayer for Mp3Compat {
    fn play(&self, format: &str, file: &str) -> Result<String, BehaviorError> {
        if format.eq_ignore_ascii_case("mp3") {
            Ok(self.deck.play_mp3(file))
        } else {
            Err(BehaviorError::UnsupportedFormat(format.to_string()))
        }
    }
}

/// Adapter owning all three decks, dispatching on the format selector.
pub struct UniversalPlayer {
    mp3: Mp3Deck,
    mp4: Mp4Deck,
    vlc: VlcDeck,
}

impl UniversalPlayer {
    pub fn new() -> Self {
        Self {
            mp3: Mp3Deck,
            mp4: Mp4Deck,
            vlc: VlcDeck,
        }
    }
}

impl Default for UniversalPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaPlayer for UniversalPlayer {
    fn play(&self, format: &str, file: &str) -> Result<String, BehaviorError> {
        match format.to_ascii_lowercase().as_str() {
            "mp3" => Ok(self.mp3.play_mp3(file)),
            "mp4" => Ok(self.mp4.play_mp4(file)),
            "vlc" => Ok(self.vlc.play_vlc(file)),
            _ => Err(BehaviorError::UnsupportedFormat(format.to_string())),
        }
    }
}

// ============================================================================
// Interface adapter: default "unsupported" bodies
// ============================================================================

/// Outcome of asking an [`AdvancedPlayer`] for a specific format. The
/// `Unsupported` case is an ordinary value, so implementors can decline a
/// format without erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playback {
    Played { format: String, file: String },
    Unsupported { format: String },
}

/// Four-format player where every operation defaults to declining, so a
/// concrete deck overrides only the formats it actually supports.
pub trait AdvancedPlayer {
    fn play_mp3(&self, _file: &str) -> Playback {
        Playback::Unsupported {
            format: "mp3".to_string(),
        }
    }

    fn play_mp4(&self, _file: &str) -> Playback {
        Playback::Unsupported {
            format: "mp4".to_string(),
        }
    }

    fn play_vlc(&self, _file: &str) -> Playback {
        Playback::Unsupported {
            format: "vlc".to_string(),
        }
    }

    fn play_avi(&self, _file: &str) -> Playback {
        Playback::Unsupported {
            format: "avi".to_string(),
        }
    }
}

/// Supports mp3 and mp4 only; vlc and avi fall through to the defaults.
pub struct CustomDeck;

impl AdvancedPlayer for CustomDeck {
    fn play_mp3(&self, file: &str) -> Playback {
        Playback::Played {
            format: "mp3".to_string(),
            file: file.to_string(),
        }
    }

    fn play_mp4(&self, file: &str) -> Playback {
        Playback::Played {
            format: "mp4".to_string(),
            file: file.to_string(),
        }
    }
}

// ============================================================================
// Bidirectional socket adapter
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standard {
    Euro,
    Us,
}

/// Power delivered by a socket. A feed obtained through conversion carries
/// the native side it was converted from, so callers can tell it apart from
/// a native feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerFeed {
    pub volts: u32,
    pub standard: Standard,
    pub converted_from: Option<Standard>,
}

pub trait EuroSocket {
    fn provide_electricity(&self) -> PowerFeed;
}

pub trait UsSocket {
    fn supply_power(&self) -> PowerFeed;
}

pub struct EuroOutlet;

impl EuroSocket for EuroOutlet {
    fn provide_electricity(&self) -> PowerFeed {
        PowerFeed {
            volts: 220,
            standard: Standard::Euro,
            converted_from: None,
        }
    }
}

pub struct UsOutlet;

impl UsSocket for UsOutlet {
    fn supply_power(&self) -> PowerFeed {
        PowerFeed {
            volts: 110,
            standard: Standard::Us,
            converted_from: None,
        }
    }
}

/// Exposes both socket shapes while owning exactly one real outlet. The
/// binding is fixed at construction; converting a device to the other
/// standard requires a new adapter instance.
pub enum SocketAdapter {
    BoundToEuro(EuroOutlet),
    BoundToUs(UsOutlet),
}

impl EuroSocket for SocketAdapter {
    fn provide_electricity(&self) -> PowerFeed {
        match self {
            SocketAdapter::BoundToEuro(outlet) => outlet.provide_electricity(),
            SocketAdapter::BoundToUs(outlet) => {
                let native = outlet.supply_power();
                PowerFeed {
                    volts: 220,
                    standard: Standard::Euro,
                    converted_from: Some(native.standard),
                }
            }
        }
    }
}

impl UsSocket for SocketAdapter {
    fn supply_power(&self) -> PowerFeed {
        match self {
            SocketAdapter::BoundToUs(outlet) => outlet.supply_power(),
            SocketAdapter::BoundToEuro(outlet) => {
                let native = outlet.provide_electricity();
                PowerFeed {
                    volts: 110,
                    standard: Standard::Us,
                    converted_from: Some(native.standard),
                }
            }
        }
    }
}
