use tmdb_model::{ImageCategory, ImagesConfiguration};
use url::Url;

const PATH: &str = "/image.jpg";

fn configuration() -> ImagesConfiguration {
    ImagesConfiguration::default()
}

fn empty_configuration() -> ImagesConfiguration {
    ImagesConfiguration::new(
        Url::parse("http://image.tmdb.org/t/p/").unwrap(),
        Url::parse("https://image.tmdb.org/t/p/").unwrap(),
    )
}

fn expected(size: &str) -> Option<Url> {
    Some(
        Url::parse(&format!("https://image.tmdb.org/t/p/{size}/image.jpg"))
            .unwrap(),
    )
}

#[test]
fn backdrop_urls() {
    let config = configuration();

    assert_eq!(config.backdrop_url(None, Some(0)), None);
    assert_eq!(config.backdrop_url(Some(PATH), None), expected("original"));
    assert_eq!(
        config.backdrop_url(Some(PATH), Some(100_000)),
        expected("original")
    );
    assert_eq!(config.backdrop_url(Some(PATH), Some(1280)), expected("w1280"));
    assert_eq!(config.backdrop_url(Some(PATH), Some(900)), expected("w1280"));
    assert_eq!(config.backdrop_url(Some(PATH), Some(200)), expected("w300"));
    assert_eq!(
        empty_configuration().backdrop_url(Some(PATH), None),
        expected("original")
    );
}

#[test]
fn logo_urls() {
    let config = configuration();

    assert_eq!(config.logo_url(Some(PATH), None), expected("original"));
    assert_eq!(config.logo_url(Some(PATH), Some(100_000)), expected("original"));
    assert_eq!(config.logo_url(Some(PATH), Some(500)), expected("w500"));
    assert_eq!(config.logo_url(Some(PATH), Some(400)), expected("w500"));
    assert_eq!(config.logo_url(Some(PATH), Some(40)), expected("w45"));
    assert_eq!(
        empty_configuration().logo_url(Some(PATH), None),
        expected("original")
    );
}

#[test]
fn poster_urls() {
    let config = configuration();

    assert_eq!(config.poster_url(Some(PATH), None), expected("original"));
    assert_eq!(
        config.poster_url(Some(PATH), Some(100_000)),
        expected("original")
    );
    assert_eq!(config.poster_url(Some(PATH), Some(780)), expected("w780"));
    assert_eq!(config.poster_url(Some(PATH), Some(600)), expected("w780"));
    assert_eq!(config.poster_url(Some(PATH), Some(90)), expected("w92"));
    assert_eq!(
        empty_configuration().poster_url(Some(PATH), None),
        expected("original")
    );
}

#[test]
fn profile_urls_skip_height_sizes() {
    let config = configuration();

    assert_eq!(config.profile_url(Some(PATH), None), expected("original"));
    assert_eq!(
        config.profile_url(Some(PATH), Some(100_000)),
        expected("original")
    );
    assert_eq!(config.profile_url(Some(PATH), Some(185)), expected("w185"));
    assert_eq!(config.profile_url(Some(PATH), Some(100)), expected("w185"));
    assert_eq!(config.profile_url(Some(PATH), Some(40)), expected("w45"));
    // h632 is never a width match.
    assert_eq!(config.profile_url(Some(PATH), Some(186)), expected("original"));
    assert_eq!(
        empty_configuration().profile_url(Some(PATH), None),
        expected("original")
    );
}

#[test]
fn still_urls() {
    let config = configuration();

    assert_eq!(config.still_url(Some(PATH), None), expected("original"));
    assert_eq!(config.still_url(Some(PATH), Some(100_000)), expected("original"));
    assert_eq!(config.still_url(Some(PATH), Some(300)), expected("w300"));
    assert_eq!(config.still_url(Some(PATH), Some(190)), expected("w300"));
    assert_eq!(config.still_url(Some(PATH), Some(50)), expected("w92"));
    assert_eq!(
        empty_configuration().still_url(Some(PATH), None),
        expected("original")
    );
}

#[test]
fn missing_path_is_the_only_absent_result() {
    for config in [configuration(), empty_configuration()] {
        for category in ImageCategory::ALL {
            for width in [None, Some(0), Some(500), Some(u32::MAX)] {
                assert_eq!(config.image_url(category, None, width), None);
                assert!(config.image_url(category, Some(PATH), width).is_some());
            }
        }
    }
}

#[test]
fn empty_configuration_always_uses_original() {
    let config = empty_configuration();
    for category in ImageCategory::ALL {
        for width in [None, Some(0), Some(45), Some(100_000)] {
            assert_eq!(
                config.image_url(category, Some(PATH), width),
                expected("original"),
                "{category} {width:?}"
            );
        }
    }
}

#[test]
fn category_entry_points_match_general_resolver() {
    let config = configuration();
    for width in [None, Some(1), Some(150), Some(301), Some(781)] {
        let path = Some(PATH);
        assert_eq!(
            config.backdrop_url(path, width),
            config.image_url(ImageCategory::Backdrop, path, width)
        );
        assert_eq!(
            config.logo_url(path, width),
            config.image_url(ImageCategory::Logo, path, width)
        );
        assert_eq!(
            config.poster_url(path, width),
            config.image_url(ImageCategory::Poster, path, width)
        );
        assert_eq!(
            config.profile_url(path, width),
            config.image_url(ImageCategory::Profile, path, width)
        );
        assert_eq!(
            config.still_url(path, width),
            config.image_url(ImageCategory::Still, path, width)
        );
    }
}

#[test]
fn urls_use_the_secure_base() {
    let config = ImagesConfiguration::new(
        Url::parse("http://cdn.example/plain/").unwrap(),
        Url::parse("https://cdn.example/secure/").unwrap(),
    )
    .with_sizes(ImageCategory::Poster, ["w154", "original"]);

    let url = config.poster_url(Some("/p.jpg"), Some(100)).unwrap();
    assert_eq!(url.as_str(), "https://cdn.example/secure/w154/p.jpg");
}

#[test]
fn resolver_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ImagesConfiguration>();

    let config = std::sync::Arc::new(configuration());
    let handles: Vec<_> = (0..4u32)
        .map(|i| {
            let config = config.clone();
            std::thread::spawn(move || {
                config.poster_url(Some(PATH), Some(100 * i + 90))
            })
        })
        .collect();

    let urls: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(
        urls,
        vec![expected("w92"), expected("w342"), expected("w342"), expected("w500")]
    );
}
