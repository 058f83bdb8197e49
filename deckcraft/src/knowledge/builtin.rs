//! Built-in place data
//!
//! Order matters: lookup takes the first key contained in the subject.

use super::GeographicProfile;

pub(super) fn places() -> Vec<(&'static str, GeographicProfile)> {
    vec![
        (
            "golden",
            GeographicProfile::from_static(
                [
                    &[
                        "Early morning sunrise over the rugged Front Range of the Rocky Mountains",
                        "Dramatic sunset behind the foothills with golden hour lighting",
                        "Snow-capped peaks of the Continental Divide in winter",
                    ],
                    &[
                        "The iconic Golden 'Welcome Arch' spanning Washington Avenue",
                        "The Colorado School of Mines campus with historic buildings",
                        "Lookout Mountain rising majestically above the town",
                    ],
                    &[
                        "Clear Creek winding through the city with kayakers",
                        "The historic downtown district with Victorian architecture",
                        "Coors Brewery complex with industrial smokestacks",
                    ],
                    &[
                        "A skateboarder mid-trick in front of the historic Astor House Hotel",
                        "Mountain bikers on the Clear Creek Trail",
                        "Rock climbers scaling the nearby cliffs",
                    ],
                    &[
                        "A small Coors Brewery smokestack and a faint mountain goat on a far ridge",
                        "Buffalo Bill's grave marker on Lookout Mountain",
                        "A golden eagle soaring over the foothills",
                    ],
                ],
                Some("a weathered old-western font"),
            ),
        ),
        (
            "denver",
            GeographicProfile::from_static(
                [
                    &[
                        "The Denver skyline at sunrise with the Rocky Mountains backdrop",
                        "Union Station's iconic clock tower against stormy skies",
                        "Mile High Stadium gleaming under stadium lights",
                    ],
                    &[
                        "The 16th Street Mall bustling with pedestrians",
                        "The Denver Art Museum's angular titanium architecture",
                        "Cherry Creek flowing through the urban landscape",
                    ],
                    &[
                        "LoDo's historic brick warehouses and breweries",
                        "The State Capitol building with its gold dome",
                        "Washington Park's tree-lined pathways",
                    ],
                    &[
                        "Street performers at the 16th Street Mall",
                        "Cyclists on the Cherry Creek bike path",
                        "Skaters at a downtown plaza",
                    ],
                    &[
                        "A subtle Broncos logo, the Blue Bear peeking around a building",
                        "The Big Blue Bear statue, a small craft brewery sign",
                        "A red-tailed hawk circling downtown towers",
                    ],
                ],
                Some("a bold, industrial urban font"),
            ),
        ),
        (
            "boulder",
            GeographicProfile::from_static(
                [
                    &[
                        "The dramatic Flatirons rock formations at golden hour",
                        "The University of Colorado campus with red-tile roofs",
                        "Chautauqua Park meadows stretching toward the mountains",
                    ],
                    &[
                        "Pearl Street pedestrian mall with street performers",
                        "The iconic Flatirons silhouetted against the sky",
                        "Boulder Creek winding through the city",
                    ],
                    &[
                        "Cyclists on the Boulder Creek Path",
                        "The historic Pearl Street Mall with local shops",
                        "Rock climbers on the nearby canyon walls",
                    ],
                    &[
                        "A yoga session in Chautauqua Park",
                        "Students biking across the CU campus",
                        "Hikers preparing for a Flatirons trail",
                    ],
                    &[
                        "A prairie dog colony, the CU Buffaloes logo subtly placed",
                        "A small hot air balloon over the foothills",
                        "A golden aspen leaf floating in Boulder Creek",
                    ],
                ],
                Some("a natural, hand-drawn outdoor font"),
            ),
        ),
        (
            "aspen",
            GeographicProfile::from_static(
                [
                    &[
                        "Snow-covered peaks of the Maroon Bells reflecting in Maroon Lake",
                        "Golden aspen groves in full autumn colors",
                        "The dramatic Pyramid Peak towering over the valley",
                    ],
                    &[
                        "The historic Wheeler Opera House on Mill Street",
                        "Luxury ski lodges nestled in the mountainside",
                        "The Roaring Fork River cascading down the valley",
                    ],
                    &[
                        "Skiers carving turns on Aspen Mountain",
                        "The iconic Hotel Jerome with Victorian architecture",
                        "Mountain bikers on summer trails through aspen groves",
                    ],
                    &[
                        "Après-ski scene with people around a fire pit",
                        "A horse-drawn sleigh in winter",
                        "Hikers crossing a wooden bridge over the Roaring Fork",
                    ],
                    &[
                        "A small ski gondola, an elk silhouette on a distant ridge",
                        "A subtle Aspen leaf pattern, a distant eagle soaring",
                        "A vintage ski poster aesthetic element",
                    ],
                ],
                Some("an elegant, luxury resort-style font"),
            ),
        ),
        (
            "vail",
            GeographicProfile::from_static(
                [
                    &[
                        "The dramatic Gore Range peaks covered in fresh powder",
                        "Vail's famous Back Bowls stretching endlessly",
                        "The Eagle River Valley from high altitude",
                    ],
                    &[
                        "Vail Village's Bavarian-style architecture",
                        "The iconic covered bridges over Vail Creek",
                        "Gondolas carrying skiers up the mountain",
                    ],
                    &[
                        "Skiers navigating the legendary Blue Sky Basin",
                        "The Gerald Ford Amphitheater in summer",
                        "Mountain wildflowers in alpine meadows",
                    ],
                    &[
                        "A ski patrol rescue scene",
                        "Summer hikers on the Gore Creek Trail",
                        "A mountain wedding ceremony with epic views",
                    ],
                    &[
                        "A subtle ski trail map pattern, a golden eagle overhead",
                        "A small Colorado flag, vintage ski equipment",
                        "A ptarmigan bird camouflaged in the rocks",
                    ],
                ],
                Some("a clean, alpine-inspired sans-serif font"),
            ),
        ),
        (
            "colorado springs",
            GeographicProfile::from_static(
                [
                    &[
                        "Pikes Peak's majestic 14,115-foot summit",
                        "The Garden of the Gods red rock formations",
                        "The Air Force Academy chapel's distinctive spires",
                    ],
                    &[
                        "The dramatic Kissing Camels rock formation",
                        "Seven Falls cascading down the canyon",
                        "The Broadmoor hotel nestled against Cheyenne Mountain",
                    ],
                    &[
                        "Rock climbers scaling the red sandstone spires",
                        "The historic Manitou Springs incline railway",
                        "Hikers on the Barr Trail to Pikes Peak",
                    ],
                    &[
                        "A hot air balloon festival over the plains",
                        "Cyclists on the Pikes Peak Highway",
                        "A family exploring Cave of the Winds",
                    ],
                    &[
                        "A subtle Air Force Thunderbirds formation, a bighorn sheep",
                        "A small Pikes Peak cog railway, a prairie falcon",
                        "The Olympic Training Center rings symbol",
                    ],
                ],
                Some("a strong, mountaineering-inspired font"),
            ),
        ),
    ]
}

/// Profile for mountain or region subjects with no named match
pub(super) fn wilderness() -> GeographicProfile {
    GeographicProfile::from_static(
        [
            &[
                "Majestic Rocky Mountain peaks at sunrise",
                "Alpine lakes reflecting snow-capped summits",
                "Dramatic storm clouds over mountain ridges",
            ],
            &[
                "Historic mining town buildings",
                "A winding mountain highway",
                "Dense evergreen forests on steep slopes",
            ],
            &[
                "A rushing mountain stream with boulders",
                "Wildflower meadows in summer bloom",
                "Hiking trails through aspen groves",
            ],
            &[
                "Outdoor adventurers with backpacks",
                "A rustic cabin with smoke rising",
                "Wildlife like elk or deer",
            ],
            &[
                "A distant eagle circling, abandoned mining equipment",
                "A small waterfall, vintage trail markers",
                "A coyote silhouette on a ridge",
            ],
        ],
        Some("a rugged, wilderness-style font"),
    )
}
