/*!
# `CLEAR`

## Purpose
Clear the host's display surface.

## Remarks
Variables are untouched; only the screen is wiped. What "wiped" means
belongs to the host: the bundled terminal front-end clears the
terminal window.

## Example
```text
print "gone in a moment"
clear
print "fresh screen"
```

*/
