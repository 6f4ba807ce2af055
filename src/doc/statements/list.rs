/*!
# `LIST [<from>][-[<to>]]`

## Purpose
Show the program.

## Remarks
`LIST 20` shows line 20, `LIST 20-40`, `LIST 20-` and `LIST -40` show
ranges. Ctrl-C stops the listing.

## Example
```text
LIST 10-20
10 print "one"
20 print "two"
Ready.
```

*/
