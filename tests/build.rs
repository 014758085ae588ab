use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{TimeZone, Utc};

use blogroll::components::CONTACT_LINKS;
use blogroll::query::ContentIndex;
use blogroll::Blog;

fn write(base: &Path, relative: &str, content: &str) {
    let path = base.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn sample_site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path();

    write(
        base,
        "_config.yml",
        "title: Brian Walshe\nbyline: Things I have been working on\n",
    );
    write(
        base,
        "content/posts/first.md",
        "---\ntitle: First Post\ndate: 2019-05-01\nfeaturedImage: ./first.png\n---\n\nThe very first post.\n",
    );
    write(base, "content/posts/first.png", "not really a png");
    write(
        base,
        "content/posts/second/index.md",
        "---\ntitle: Second Post\ndate: 2020-01-01\n---\n\nShort intro.\n<!-- more -->\nThe rest of the post.\n",
    );
    write(
        base,
        "content/posts/unfinished.md",
        "---\ntitle: Unfinished\ndate: 2021-01-01\ndraft: true\n---\n\nNot yet.\n",
    );
    write(base, "static/images/blogheader.png", "header");

    dir
}

#[test]
fn index_orders_posts_newest_first_and_skips_drafts() {
    let site = sample_site();
    let blog = Blog::new(site.path()).unwrap();
    let index = ContentIndex::load(&blog).unwrap();

    let connection = index.all_posts();
    assert_eq!(connection.total_count, 2);
    let slugs: Vec<_> = connection.edges.iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, vec!["/posts/second/", "/posts/first/"]);

    let first = &connection.edges[1];
    assert_eq!(first.date, "01 May, 2019");
    assert_eq!(first.excerpt, "The very first post.");
    assert_eq!(first.thumbnail.as_ref().unwrap().src, "/posts/first.png");

    let second = &connection.edges[0];
    assert_eq!(second.excerpt, "Short intro.");
    assert!(second.thumbnail.is_none());
}

#[test]
fn drafts_are_listed_when_enabled() {
    let site = sample_site();
    let mut blog = Blog::new(site.path()).unwrap();
    blog.config.render_drafts = true;

    let index = ContentIndex::load(&blog).unwrap();
    assert_eq!(index.all_posts().edges[0].title, "Unfinished");
}

#[test]
fn duplicate_slugs_keep_the_first_file() {
    let site = sample_site();
    write(
        site.path(),
        "content/posts/zz-copy.md",
        "---\ntitle: Copy\ndate: 2022-01-01\nslug: /posts/first/\n---\nCopy.\n",
    );

    let blog = Blog::new(site.path()).unwrap();
    let index = ContentIndex::load(&blog).unwrap();
    let titles: Vec<_> = index.posts().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Second Post", "First Post"]);
}

#[test]
fn posts_claiming_the_site_root_do_not_replace_the_front_page() {
    let site = sample_site();
    write(
        site.path(),
        "content/index.md",
        "---\ntitle: Home\ndate: 2023-01-01\n---\nWelcome.\n",
    );
    write(
        site.path(),
        "content/posts/rooted.md",
        "---\ntitle: Rooted\ndate: 2023-02-01\nslug: /\n---\nAlso the root.\n",
    );

    let blog = Blog::new(site.path()).unwrap();
    let summary = blog.build().unwrap();
    assert_eq!(summary.pages, 3);

    let front = fs::read_to_string(site.path().join("public/index.html")).unwrap();
    assert!(front.contains("<h4>2 Posts</h4>"));
    assert!(front.contains("header-large"));
    assert!(!front.contains("header-small"));
    assert!(!front.contains("Welcome."));
}

#[test]
fn broken_posts_are_skipped_and_the_rest_still_render() {
    let site = sample_site();
    write(
        site.path(),
        "content/posts/bad-yaml.md",
        "---\ntitle: [unclosed\ndate: 2020-01-01\n---\nBody.\n",
    );
    write(
        site.path(),
        "content/posts/bad-json.md",
        ";;;\n{\"title\": \"Never closed\"}\nBody.\n",
    );
    fs::write(
        site.path().join("content/posts/binary.md"),
        [0xff, 0xfe, 0x00, 0x80],
    )
    .unwrap();

    let blog = Blog::new(site.path()).unwrap();
    let index = ContentIndex::load(&blog).unwrap();
    let titles: Vec<_> = index.posts().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Second Post", "First Post"]);

    let summary = blog.build().unwrap();
    assert_eq!(summary.pages, 3);
    let front = fs::read_to_string(site.path().join("public/index.html")).unwrap();
    assert!(front.contains("<h4>2 Posts</h4>"));
    assert!(!front.contains("unclosed"));
    assert!(!site.path().join("public/posts/bad-yaml/index.html").exists());
}

#[test]
fn missing_title_and_date_fall_back_to_the_file() {
    let site = sample_site();
    let path = site.path().join("content/posts/loose-notes.md");
    write(site.path(), "content/posts/loose-notes.md", "Just some notes.\n");

    let modified = Utc.with_ymd_and_hms(2000, 6, 15, 12, 0, 0).unwrap();
    fs::File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(SystemTime::from(modified))
        .unwrap();

    let blog = Blog::new(site.path()).unwrap();
    let index = ContentIndex::load(&blog).unwrap();
    let connection = index.all_posts();
    assert_eq!(connection.total_count, 3);

    let notes = connection.edges.last().unwrap();
    assert_eq!(notes.title, "loose-notes");
    assert!(notes.date.ends_with("June, 2000"));
    assert_eq!(notes.slug, "/posts/loose-notes/");
    assert_eq!(notes.excerpt, "Just some notes.");
}

#[test]
fn percent_signs_in_the_date_format_are_literal() {
    let site = sample_site();
    write(
        site.path(),
        "_config.yml",
        "title: Brian Walshe\ndate_format: \"DD MMMM, YYYY 100%\"\n",
    );

    let blog = Blog::new(site.path()).unwrap();
    blog.build().unwrap();
    let front = fs::read_to_string(site.path().join("public/index.html")).unwrap();
    assert!(front.contains("01 May, 2019 100%"));
}

#[test]
fn long_bodies_are_pruned_to_the_excerpt_length() {
    let site = sample_site();
    let body = "word ".repeat(400);
    write(
        site.path(),
        "content/posts/long.md",
        &format!("---\ntitle: Long\ndate: 2018-01-01\n---\n{}", body),
    );

    let blog = Blog::new(site.path()).unwrap();
    let index = ContentIndex::load(&blog).unwrap();
    let long = index
        .all_posts()
        .edges
        .into_iter()
        .find(|r| r.title == "Long")
        .unwrap();
    assert!(long.excerpt.chars().count() <= 500);
    assert!(long.excerpt.ends_with('…'));
}

#[test]
fn build_writes_front_page_posts_and_assets() {
    let site = sample_site();
    let blog = Blog::new(site.path()).unwrap();
    let summary = blog.build().unwrap();
    assert_eq!(summary.pages, 3);
    assert_eq!(summary.assets, 2);

    let public = site.path().join("public");
    let front = fs::read_to_string(public.join("index.html")).unwrap();
    assert!(front.contains("<h4>2 Posts</h4>"));
    assert!(front.contains("header-large"));
    assert!(!front.contains("header-small"));
    assert!(front.contains("Things I have been working on"));
    assert!(front.find("Second Post").unwrap() < front.find("First Post").unwrap());
    assert!(!front.contains("Unfinished"));
    for link in CONTACT_LINKS {
        assert_eq!(front.matches(link.href).count(), 1);
    }

    let post = fs::read_to_string(public.join("posts/second/index.html")).unwrap();
    assert!(post.contains("header-small"));
    assert!(post.contains("The rest of the post."));
    assert!(!post.contains("<!-- more -->"));

    assert!(public.join("posts/first/index.html").exists());
    assert!(public.join("posts/first.png").exists());
    assert!(public.join("images/blogheader.png").exists());
    assert!(!public.join("posts/first.md").exists());
}

#[test]
fn empty_site_builds_a_zero_post_front_page() {
    let dir = tempfile::tempdir().unwrap();
    let blog = Blog::new(dir.path()).unwrap();
    let summary = blog.build().unwrap();
    assert_eq!(summary.pages, 1);

    let front = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
    assert!(front.contains("<h4>0 Posts</h4>"));
    // Only the contact links remain as list items
    assert_eq!(front.matches("<li").count(), CONTACT_LINKS.len());
}

#[test]
fn clean_removes_the_public_directory() {
    let site = sample_site();
    let blog = Blog::new(site.path()).unwrap();
    blog.build().unwrap();
    assert!(blog.public_dir.exists());

    blog.clean().unwrap();
    assert!(!blog.public_dir.exists());
    // Cleaning twice is fine
    blog.clean().unwrap();
}

#[test]
fn new_post_is_picked_up_by_the_index() {
    let dir = tempfile::tempdir().unwrap();
    let blog = Blog::new(dir.path()).unwrap();

    let path = blog.new_post("Hello: World").unwrap();
    assert!(path.ends_with("content/posts/hello-world.md"));
    assert!(blog.new_post("Hello: World").is_err());

    let index = ContentIndex::load(&blog).unwrap();
    let connection = index.all_posts();
    assert_eq!(connection.total_count, 1);
    assert_eq!(connection.edges[0].title, "Hello: World");
    assert_eq!(connection.edges[0].slug, "/posts/hello-world/");
}
